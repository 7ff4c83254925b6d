//! Numeral conversions
//!
//! [`Converter`] returns `Result` from all four operations. The free functions
//! keep the legacy call surface, where only `binary_to_decimal` reports an
//! error and the others return `None` for anything they cannot convert.

use crate::config::{ConverterConfig, HexInputCase};
use crate::error::{NumconvError, Result};
use crate::numeral::{validate, Base, Numeral};
use crate::tables::{nibble_from_bits, nibble_of, HEX_DIGITS, NIBBLE_BITS, NIBBLE_WIDTH};
use tracing::{debug, trace};

/// Stateless numeral converter
///
/// # Example
/// ```
/// use voltage_numconv::Converter;
///
/// let conv = Converter::strict();
/// assert_eq!(conv.binary_to_hex("0b1010")?, "0xA");
/// assert_eq!(conv.hex_to_binary("0xA")?, "0b1010");
/// assert_eq!(conv.decimal_to_binary(5)?, "0b101");
/// assert_eq!(conv.binary_to_decimal("0b101")?, 5);
/// # Ok::<(), voltage_numconv::NumconvError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Converter following the exact uppercase-only grammar
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Validate a binary numeral
    pub fn parse_binary<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Numeral> {
        validate(input.into(), Base::Binary, self.config.hex_input)
    }

    /// Validate a hexadecimal numeral under the configured case policy
    pub fn parse_hex<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Numeral> {
        validate(input.into(), Base::Hexadecimal, self.config.hex_input)
    }

    /// `0b...` to a non-negative integer in `[0, 2^31 - 1]`
    pub fn binary_to_decimal<'a>(&self, binary: impl Into<Option<&'a str>>) -> Result<i32> {
        let numeral = self.parse_binary(binary)?;
        // At most 31 digits, so the accumulator never reaches the sign bit
        let value = numeral
            .digits()
            .bytes()
            .fold(0i32, |acc, bit| acc * 2 + i32::from(bit - b'0'));
        self.log_success("binary_to_decimal", numeral.as_str(), value);
        Ok(value)
    }

    /// Integer to minimal-length `0b...`; `0` yields `0b0`
    pub fn decimal_to_binary(&self, decimal: i32) -> Result<String> {
        if decimal < 0 {
            debug!(decimal, "negative value has no binary numeral");
            return Err(NumconvError::unsupported_value(decimal));
        }

        let mut remaining = decimal as u32;
        let mut digits = Vec::with_capacity(Base::Binary.max_digits());
        // Emit at least one digit so zero becomes "0"
        loop {
            digits.push(b'0' + (remaining % 2) as u8);
            remaining /= 2;
            if remaining == 0 {
                break;
            }
        }

        let mut out = String::with_capacity(Base::Binary.prefix().len() + digits.len());
        out.push_str(Base::Binary.prefix());
        out.extend(digits.iter().rev().map(|&d| d as char));

        self.log_success("decimal_to_binary", decimal, &out);
        Ok(out)
    }

    /// `0b...` to `0x...`, grouping bits into nibbles from the least significant end
    pub fn binary_to_hex<'a>(&self, binary: impl Into<Option<&'a str>>) -> Result<String> {
        let numeral = self.parse_binary(binary)?;
        let bits = numeral.digits().as_bytes();

        let pad = (NIBBLE_WIDTH - bits.len() % NIBBLE_WIDTH) % NIBBLE_WIDTH;
        let mut padded = vec![b'0'; pad];
        padded.extend_from_slice(bits);

        let mut out = String::with_capacity(Base::Hexadecimal.prefix().len() + padded.len() / NIBBLE_WIDTH);
        out.push_str(Base::Hexadecimal.prefix());
        for group in padded.chunks(NIBBLE_WIDTH) {
            out.push(HEX_DIGITS[usize::from(nibble_from_bits(group))]);
        }

        self.log_success("binary_to_hex", numeral.as_str(), &out);
        Ok(out)
    }

    /// `0x...` to `0b...` with four binary digits per hex digit
    pub fn hex_to_binary<'a>(&self, hex: impl Into<Option<&'a str>>) -> Result<String> {
        let numeral = self.parse_hex(hex)?;
        let digits = numeral.digits();

        let mut out = String::with_capacity(Base::Binary.prefix().len() + digits.len() * 4);
        out.push_str(Base::Binary.prefix());
        for ch in digits.chars() {
            // Numeral digits are validated and normalized to uppercase
            if let Some(nibble) = nibble_of(ch) {
                out.push_str(NIBBLE_BITS[usize::from(nibble)]);
            }
        }

        self.log_success("hex_to_binary", numeral.as_str(), &out);
        Ok(out)
    }

    fn log_success(
        &self,
        op: &'static str,
        input: impl std::fmt::Display,
        output: impl std::fmt::Display,
    ) {
        if self.config.log_conversions {
            trace!(op, %input, %output, "converted");
        }
    }
}

impl From<ConverterConfig> for Converter {
    fn from(config: ConverterConfig) -> Self {
        Self::new(config)
    }
}

impl From<HexInputCase> for Converter {
    fn from(hex_input: HexInputCase) -> Self {
        Self::new(ConverterConfig {
            hex_input,
            ..ConverterConfig::default()
        })
    }
}

// === Legacy call surface (strict grammar) ===

/// Binary numeral to decimal; fails with [`NumconvError::InvalidFormat`] on malformed input
pub fn binary_to_decimal<'a>(binary: impl Into<Option<&'a str>>) -> Result<i32> {
    Converter::strict().binary_to_decimal(binary)
}

/// Decimal to binary numeral; `None` for negative input
pub fn decimal_to_binary(decimal: i32) -> Option<String> {
    Converter::strict().decimal_to_binary(decimal).ok()
}

/// Binary numeral to hexadecimal numeral; `None` on malformed input
pub fn binary_to_hex<'a>(binary: impl Into<Option<&'a str>>) -> Option<String> {
    Converter::strict().binary_to_hex(binary).ok()
}

/// Hexadecimal numeral to binary numeral; `None` on malformed input
pub fn hex_to_binary<'a>(hex: impl Into<Option<&'a str>>) -> Option<String> {
    Converter::strict().hex_to_binary(hex).ok()
}
