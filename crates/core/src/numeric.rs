//! Numeric replacement values and their 32-byte word encoding.

use crate::result::{Error, Result};
use alloy_primitives::{U256, U512};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A numeric replacement that has not been range-checked yet.
///
/// Textual values are decimal, or hexadecimal with a `0x` prefix, and may exceed 256 bits until
/// they are encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numeric {
    Uint(U256),
    Text(String),
}

impl Numeric {
    /// Parse the value into a `U256`, failing if it does not fit in 32 bytes.
    pub fn to_u256(&self) -> Result<U256> {
        match self {
            Numeric::Uint(value) => Ok(*value),
            Numeric::Text(text) => parse_text(text),
        }
    }

    /// Zero-padded 64-character big-endian hex word, without `0x`.
    pub fn to_word(&self) -> Result<String> {
        self.to_u256().map(encode_word)
    }
}

/// Encode `value` as a zero-padded 64-character big-endian hex word.
pub fn encode_word(value: U256) -> String {
    hex::encode(value.to_be_bytes::<32>())
}

fn parse_text(text: &str) -> Result<U256> {
    let trimmed = text.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidNumber(text.to_string()));
    }
    // Every digit is valid for the radix, so the only remaining failure is overflow. Values are
    // parsed 512 bits wide so that an oversize hex literal is still reported in decimal.
    let wide = U512::from_str_radix(digits, radix as u64)
        .map_err(|_| Error::NumberTooLarge(trimmed.to_string()))?;
    let bytes = wide.to_be_bytes::<64>();
    if bytes[..32].iter().any(|&b| b != 0) {
        return Err(Error::NumberTooLarge(wide.to_string()));
    }
    Ok(U256::from_be_slice(&bytes[32..]))
}

impl From<U256> for Numeric {
    fn from(value: U256) -> Self {
        Numeric::Uint(value)
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric::Uint(U256::from(value))
    }
}

impl From<u128> for Numeric {
    fn from(value: u128) -> Self {
        Numeric::Uint(U256::from(value))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    /// Accepts JSON numbers of any size and numeric strings. Numbers keep their literal text
    /// (`serde_json` is built with `arbitrary_precision`) so the range check happens on encoding.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => Ok(Numeric::Text(number.to_string())),
            Value::String(text) => Ok(Numeric::Text(text)),
            other => Err(D::Error::custom(format!(
                "expected a number or numeric string, got {other}"
            ))),
        }
    }
}
