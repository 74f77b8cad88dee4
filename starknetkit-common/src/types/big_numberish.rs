use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use starknet::core::{types::Felt, utils::cairo_short_string_to_felt};

use crate::errors::{ConversionError, SchemaError};

/// Maximum number of characters that fit in a Cairo short string.
pub const SHORT_STRING_MAX_LEN: usize = 31;

/// Felts are below 2^252, which has 76 decimal digits.
const MAX_INTEGER_DIGITS: usize = 77;

/// Returns true for `0x`-prefixed strings made only of hex digits (case-insensitive).
pub fn is_hex_string(s: &str) -> bool {
    s.len() > 2
        && (s.starts_with("0x") || s.starts_with("0X"))
        && s[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true for non-empty strings made only of ASCII digits.
pub fn is_decimal_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// A compact identifier encoded in place of a numeric field.
///
/// Non-empty ASCII, at most 31 characters, and neither hex-looking nor
/// decimal-looking so it cannot be confused with the numeric encodings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortString(String);

impl ShortString {
    pub fn new(value: impl Into<String>) -> Result<Self, SchemaError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SchemaError::EmptyShortString);
        }
        let len = value.encode_utf16().count();
        if len > SHORT_STRING_MAX_LEN {
            return Err(SchemaError::ShortStringTooLong(len));
        }
        if !value.is_ascii() {
            return Err(SchemaError::NonAsciiShortString(value));
        }
        if is_hex_string(&value) {
            return Err(SchemaError::HexShortString(value));
        }
        if is_decimal_string(&value) {
            return Err(SchemaError::DecimalShortString(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ShortString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

/// Any of the accepted encodings of a large integer used in calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumberish {
    Hex(String),
    Decimal(String),
    ShortString(ShortString),
    Number(i64),
    /// Integral value outside of the `i64` range, kept with a zero scale.
    BigInt(BigDecimal),
}

impl BigNumberish {
    /// Classifies a raw JSON value.
    ///
    /// Strings are tested as hex first, then decimal, and only then as a
    /// short string. Numbers must be integral.
    pub fn classify(value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::String(s) if is_hex_string(s) => Ok(Self::Hex(s.clone())),
            Value::String(s) if is_decimal_string(s) => Ok(Self::Decimal(s.clone())),
            Value::String(s) => ShortString::new(s.as_str()).map(Self::ShortString),
            Value::Number(n) => Self::from_number(n),
            other => Err(SchemaError::InvalidBigNumberish(other.to_string())),
        }
    }

    fn from_number(n: &Number) -> Result<Self, SchemaError> {
        if let Some(v) = n.as_i64() {
            return Ok(Self::Number(v));
        }
        let literal = n.to_string();
        let invalid = || SchemaError::InvalidBigNumberish(literal.clone());
        let decimal = BigDecimal::from_str(&literal).map_err(|_| invalid())?;

        // The value is `digits * 10^-scale`. The scale comes straight from the
        // literal's exponent and is never applied to the digits directly.
        let (digits, scale) = decimal.as_bigint_and_exponent();
        let digits = digits.to_string();
        let (sign, magnitude) = digits
            .strip_prefix('-')
            .map_or(("", digits.as_str()), |magnitude| ("-", magnitude));
        if magnitude.bytes().all(|b| b == b'0') {
            return Ok(Self::Number(0));
        }

        let integer = if scale > 0 {
            let fraction_len = usize::try_from(scale).map_err(|_| invalid())?;
            if fraction_len >= magnitude.len() {
                return Err(invalid());
            }
            let (whole, fraction) = magnitude.split_at(magnitude.len() - fraction_len);
            if fraction.bytes().any(|b| b != b'0') || whole.len() > MAX_INTEGER_DIGITS {
                return Err(invalid());
            }
            format!("{sign}{whole}")
        } else {
            let zeros = usize::try_from(scale.unsigned_abs()).map_err(|_| invalid())?;
            if magnitude.len().saturating_add(zeros) > MAX_INTEGER_DIGITS {
                return Err(invalid());
            }
            format!("{sign}{magnitude}{}", "0".repeat(zeros))
        };

        match integer.parse::<i64>() {
            Ok(v) => Ok(Self::Number(v)),
            Err(_) => BigDecimal::from_str(&integer)
                .map(Self::BigInt)
                .map_err(|_| invalid()),
        }
    }

    /// Decimal digits of a numeric variant, `None` for string variants.
    fn integer_digits(&self) -> Option<String> {
        match self {
            Self::Number(v) => Some(v.to_string()),
            Self::BigInt(v) => Some(v.as_bigint_and_exponent().0.to_string()),
            _ => None,
        }
    }

    /// Converts the value into a field element the way the wallet dispatcher expects.
    pub fn to_felt(&self) -> Result<Felt, ConversionError> {
        let err = || ConversionError::FeltConversion(self.to_string());
        match self {
            Self::Hex(s) => {
                let digits = s.get(2..).ok_or_else(err)?;
                Felt::from_hex(&format!("0x{digits}")).map_err(|_| err())
            }
            Self::Decimal(s) => Felt::from_dec_str(s).map_err(|_| err()),
            Self::ShortString(s) => cairo_short_string_to_felt(s.as_str()).map_err(|_| err()),
            Self::Number(v) => Ok(Felt::from(*v)),
            Self::BigInt(_) => {
                let digits = self.integer_digits().ok_or_else(err)?;
                if digits.starts_with('-') {
                    return Err(err());
                }
                Felt::from_dec_str(&digits).map_err(|_| err())
            }
        }
    }
}

impl TryFrom<Value> for BigNumberish {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::classify(&value)
    }
}

impl fmt::Display for BigNumberish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(s) | Self::Decimal(s) => f.write_str(s),
            Self::ShortString(s) => f.write_str(s.as_str()),
            Self::Number(_) | Self::BigInt(_) => {
                f.write_str(&self.integer_digits().unwrap_or_default())
            }
        }
    }
}

impl Serialize for BigNumberish {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Hex(s) | Self::Decimal(s) => serializer.serialize_str(s),
            Self::ShortString(s) => serializer.serialize_str(s.as_str()),
            Self::Number(v) => serializer.serialize_i64(*v),
            Self::BigInt(_) => {
                let digits = self.integer_digits().unwrap_or_default();
                Number::from_str(&digits)
                    .map_err(serde::ser::Error::custom)?
                    .serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for BigNumberish {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::classify(&value).map_err(serde::de::Error::custom)
    }
}
