// Mon Aug 24 2026 - Alex

use crate::search::{ElementWidth, ParseError, MAX_VALUE_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeral system for integer search literals. Float literals are always
/// parsed in base 10, whatever is selected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericBase {
    Decimal,
    Hexadecimal,
    Octal,
}

impl NumericBase {
    pub const fn radix(self) -> u32 {
        match self {
            NumericBase::Decimal => 10,
            NumericBase::Hexadecimal => 16,
            NumericBase::Octal => 8,
        }
    }
}

impl fmt::Display for NumericBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericBase::Decimal => f.write_str("decimal"),
            NumericBase::Hexadecimal => f.write_str("hexadecimal"),
            NumericBase::Octal => f.write_str("octal"),
        }
    }
}

impl FromStr for NumericBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decimal" | "dec" | "10" => Ok(NumericBase::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(NumericBase::Hexadecimal),
            "octal" | "oct" | "8" => Ok(NumericBase::Octal),
            other => Err(format!("unknown numeric base: {}", other)),
        }
    }
}

/// Converts a user-entered literal into the fixed-width big-endian bytes the
/// engine compares against. This is the single place user input crosses into
/// the region's byte order. A blank literal is an error here; the caller
/// decides whether blank means "compare against the prior value" instead.
pub fn encode_search_value(
    text: &str,
    width: ElementWidth,
    base: NumericBase,
) -> Result<[u8; MAX_VALUE_WIDTH], ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if width.is_float() {
        let value: f32 = text
            .parse()
            .map_err(|_| ParseError::InvalidFloat(text.to_string()))?;
        return Ok(value.to_bits().to_be_bytes());
    }

    let digits = if base == NumericBase::Hexadecimal {
        text.trim_start_matches("0x").trim_start_matches("0X")
    } else {
        text
    };
    let value = u32::from_str_radix(digits, base.radix())
        .map_err(|_| ParseError::InvalidInteger(text.to_string(), base.radix()))?;

    let mut out = [0u8; MAX_VALUE_WIDTH];
    match width.size() {
        1 => {
            if value > u32::from(u8::MAX) {
                return Err(ParseError::OutOfRange(value, 1));
            }
            out[0] = value as u8;
        }
        2 => {
            if value > u32::from(u16::MAX) {
                return Err(ParseError::OutOfRange(value, 2));
            }
            out[..2].copy_from_slice(&(value as u16).to_be_bytes());
        }
        _ => out = value.to_be_bytes(),
    }
    Ok(out)
}

/// Unsigned interpretation of big-endian value bytes at the given width.
pub fn decode_value(bytes: &[u8; MAX_VALUE_WIDTH], width: ElementWidth) -> u32 {
    match width.size() {
        1 => u32::from(bytes[0]),
        2 => u32::from(u16::from_be_bytes([bytes[0], bytes[1]])),
        _ => u32::from_be_bytes(*bytes),
    }
}

/// Reinterprets the four value bytes as an IEEE-754 float.
pub fn decode_f32(bytes: &[u8; MAX_VALUE_WIDTH]) -> f32 {
    f32::from_bits(u32::from_be_bytes(*bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let bytes = encode_search_value("100", ElementWidth::Short, NumericBase::Decimal).unwrap();
        assert_eq!(bytes, [0x00, 0x64, 0x00, 0x00]);
        assert_eq!(decode_value(&bytes, ElementWidth::Short), 100);

        let bytes = encode_search_value("deadbeef", ElementWidth::Int, NumericBase::Hexadecimal)
            .unwrap();
        assert_eq!(decode_value(&bytes, ElementWidth::Int), 0xdead_beef);

        let bytes = encode_search_value("0x2a", ElementWidth::Byte, NumericBase::Hexadecimal)
            .unwrap();
        assert_eq!(decode_value(&bytes, ElementWidth::Byte), 42);

        let bytes = encode_search_value("17", ElementWidth::Byte, NumericBase::Octal).unwrap();
        assert_eq!(decode_value(&bytes, ElementWidth::Byte), 0o17);
    }

    #[test]
    fn test_encode_float() {
        let bytes = encode_search_value("1.5", ElementWidth::Float, NumericBase::Decimal).unwrap();
        assert_eq!(bytes, 1.5f32.to_bits().to_be_bytes());
        assert_eq!(decode_f32(&bytes), 1.5);

        // Base selection does not apply to float literals.
        let bytes =
            encode_search_value("-2.25", ElementWidth::Float, NumericBase::Hexadecimal).unwrap();
        assert_eq!(decode_f32(&bytes), -2.25);
    }

    #[test]
    fn test_encode_rejects_malformed() {
        assert_eq!(
            encode_search_value("", ElementWidth::Int, NumericBase::Decimal),
            Err(ParseError::Empty)
        );
        assert_eq!(
            encode_search_value("   ", ElementWidth::Int, NumericBase::Decimal),
            Err(ParseError::Empty)
        );
        assert!(matches!(
            encode_search_value("zz", ElementWidth::Int, NumericBase::Decimal),
            Err(ParseError::InvalidInteger(_, 10))
        ));
        assert!(matches!(
            encode_search_value("1.x", ElementWidth::Float, NumericBase::Decimal),
            Err(ParseError::InvalidFloat(_))
        ));
    }

    #[test]
    fn test_encode_rejects_overflow() {
        assert_eq!(
            encode_search_value("256", ElementWidth::Byte, NumericBase::Decimal),
            Err(ParseError::OutOfRange(256, 1))
        );
        assert_eq!(
            encode_search_value("65536", ElementWidth::Short, NumericBase::Decimal),
            Err(ParseError::OutOfRange(65536, 2))
        );
        assert!(encode_search_value("65535", ElementWidth::Short, NumericBase::Decimal).is_ok());
    }
}
