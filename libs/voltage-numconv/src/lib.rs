//! voltage-numconv - Numeral conversion library for VoltageEMS
//!
//! Converts between binary numerals, hexadecimal numerals and native integers
//! under a fixed grammar:
//!
//! | Base | Prefix | Digits | Alphabet |
//! |------|--------|--------|----------|
//! | Binary | `0b` | 1-31 | `0`, `1` |
//! | Hexadecimal | `0x` | 1-8 | `0-9`, `A-F` |
//!
//! Decimal values are `i32` in `[0, 2^31 - 1]`.
//!
//! # Example
//!
//! ```rust
//! use voltage_numconv::{binary_to_decimal, binary_to_hex, decimal_to_binary, hex_to_binary};
//!
//! assert_eq!(decimal_to_binary(10).as_deref(), Some("0b1010"));
//! assert_eq!(binary_to_decimal("0b1010").unwrap(), 10);
//! assert_eq!(binary_to_hex("0b1010").as_deref(), Some("0xA"));
//! assert_eq!(hex_to_binary("0xA").as_deref(), Some("0b1010"));
//!
//! // Negative decimals and malformed numerals
//! assert_eq!(decimal_to_binary(-1), None);
//! assert!(binary_to_decimal("0b2").unwrap_err().is_invalid_format());
//! assert_eq!(hex_to_binary("0xGG"), None);
//! ```
//!
//! # Error channels
//!
//! The free functions keep the legacy surface: `binary_to_decimal` returns an
//! error, the other three return `None`. [`Converter`] reports every failure as
//! a [`NumconvError`], distinguishing malformed input (`InvalidFormat`) from
//! valid input outside the supported range (`UnsupportedValue`).
//!
//! # Output shape
//!
//! | Function | Output length |
//! |----------|---------------|
//! | `decimal_to_binary` | Minimal, `0` -> `0b0` |
//! | `binary_to_hex` | `ceil(bits / 4)` digits, uppercase |
//! | `hex_to_binary` | Exactly 4 bits per hex digit |

pub mod config;
pub mod converter;
pub mod error;
pub mod numeral;
mod tables;

// Re-exports for convenience
pub use config::{ConverterConfig, HexInputCase};
pub use converter::{binary_to_decimal, binary_to_hex, decimal_to_binary, hex_to_binary, Converter};
pub use error::{InvalidReason, NumconvError, Result};
pub use numeral::{validate, Base, Numeral};
