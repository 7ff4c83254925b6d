//! Numeral grammar and validator
//!
//! Accepted forms:
//! - Binary: `0b` followed by 1-31 digits from `0`, `1`
//! - Hexadecimal: `0x` followed by 1-8 digits from `0-9`, `A-F`
//!
//! Checks run in a fixed order: presence, prefix, alphabet, digit count.
//! Validation is all-or-nothing; nothing downstream sees a partially checked string.

use crate::config::HexInputCase;
use crate::error::{InvalidReason, NumconvError, Result};
use crate::tables::nibble_of;
use std::fmt;
use tracing::debug;

/// Base of a numeral string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    Hexadecimal,
}

impl Base {
    /// Mandatory prefix
    pub const fn prefix(self) -> &'static str {
        match self {
            Base::Binary => "0b",
            Base::Hexadecimal => "0x",
        }
    }

    /// Maximum digit count after the prefix
    pub const fn max_digits(self) -> usize {
        match self {
            Base::Binary => 31,
            Base::Hexadecimal => 8,
        }
    }

    /// Bits encoded by one digit
    pub const fn bits_per_digit(self) -> u32 {
        match self {
            Base::Binary => 1,
            Base::Hexadecimal => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Hexadecimal => "hexadecimal",
        }
    }

    /// Value of `ch` as a digit of this base, or None if outside the alphabet
    fn digit_value(self, ch: char, case: HexInputCase) -> Option<u8> {
        match self {
            Base::Binary => match ch {
                '0' => Some(0),
                '1' => Some(1),
                _ => None,
            },
            Base::Hexadecimal => match case {
                HexInputCase::Upper => nibble_of(ch),
                HexInputCase::AnyCase => nibble_of(ch.to_ascii_uppercase()),
            },
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated numeral string
///
/// Only obtainable through [`validate`] (or [`Numeral::parse`]), so every
/// instance satisfies the prefix, alphabet and length rules of its base.
/// Hex digits are stored uppercase regardless of input case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    base: Base,
    /// Full text including prefix
    text: String,
}

impl Numeral {
    /// Validate `input` against the strict grammar of `base`
    pub fn parse<'a>(base: Base, input: impl Into<Option<&'a str>>) -> Result<Self> {
        validate(input.into(), base, HexInputCase::Upper)
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Full numeral text, prefix included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Digits without the prefix
    pub fn digits(&self) -> &str {
        &self.text[self.base.prefix().len()..]
    }

    /// Numeric value. Never overflows: 31 binary bits or 32 hex bits fit in u32.
    pub fn value(&self) -> u32 {
        let shift = self.base.bits_per_digit();
        self.digits().chars().fold(0u32, |acc, ch| {
            let digit = self
                .base
                .digit_value(ch, HexInputCase::Upper)
                .unwrap_or_default();
            (acc << shift) | u32::from(digit)
        })
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Numeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Check `input` against the grammar of `base`
///
/// `case` only affects hexadecimal input; binary ignores it.
pub fn validate(input: Option<&str>, base: Base, case: HexInputCase) -> Result<Numeral> {
    let reject = |reason: InvalidReason| {
        debug!(base = base.name(), input = ?input, %reason, "numeral rejected");
        NumconvError::invalid_format(base, reason)
    };

    let text = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Err(reject(InvalidReason::Missing)),
    };

    let digits = text
        .strip_prefix(base.prefix())
        .ok_or_else(|| reject(InvalidReason::BadPrefix))?;

    let mut normalized = String::with_capacity(text.len());
    normalized.push_str(base.prefix());
    for (index, ch) in digits.chars().enumerate() {
        if base.digit_value(ch, case).is_none() {
            return Err(reject(InvalidReason::BadDigit { ch, index }));
        }
        normalized.push(ch.to_ascii_uppercase());
    }

    // Alphabet is ASCII at this point, so byte length == digit count
    let len = digits.len();
    if len == 0 {
        return Err(reject(InvalidReason::NoDigits));
    }
    if len > base.max_digits() {
        return Err(reject(InvalidReason::TooLong {
            len,
            max: base.max_digits(),
        }));
    }

    Ok(Numeral {
        base,
        text: normalized,
    })
}
