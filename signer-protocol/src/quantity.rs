use crate::encoding::error::{Error, Result};
use crate::hex::{describe, has_0x_prefix, hex_digits, IResult};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, hex_digit0, satisfy};
use nom::combinator::{eof, recognize};
use nom::error::context;
use nom::sequence::{pair, preceded, terminated};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const INVALID_QUANTITY: &str = "Value must be in format 0x[1-9]+[0-9]* or 0x0";
pub const NEGATIVE_QUANTITY: &str = "Negative values are not supported";

fn quantity(i: &str) -> IResult<&str, &str> {
    context(
        "quantity",
        preceded(
            tag("0x"),
            terminated(
                alt((
                    recognize(pair(
                        satisfy(|c| c.is_ascii_hexdigit() && c != '0'),
                        hex_digit0,
                    )),
                    tag("0"),
                )),
                eof,
            ),
        ),
    )(i)
}

fn decimal(i: &str) -> IResult<&str, &str> {
    context("decimal quantity", terminated(digit1, eof))(i)
}

fn parse_hex(digits: &str) -> Result<u128> {
    u128::from_str_radix(digits, 16)
        .map_err(|e| Error::decoding_with_cause(format!("0x{} is not a 128-bit quantity", digits), e))
}

/// Encodes a non-negative number as a minimal `0x` prefixed hex quantity.
pub fn encode_quantity(value: i128) -> Result<String> {
    if value < 0 {
        return Err(Error::encoding(NEGATIVE_QUANTITY));
    }
    Ok(format!("0x{:x}", value))
}

/// Decodes a hex quantity. Leading zeroes and a missing prefix are rejected.
pub fn decode_quantity(input: &str) -> Result<u128> {
    let (_, digits) = quantity(input)
        .map_err(|e| Error::decoding_with_cause(INVALID_QUANTITY, describe(input, e)))?;
    parse_hex(digits)
}

/// Accepts `0x` prefixed hex with any number of leading zeroes, or plain decimal.
pub fn decode_quantity_lenient(input: &str) -> Result<u128> {
    if has_0x_prefix(input) {
        let digits = hex_digits(input)?;
        if digits.is_empty() {
            return Err(Error::decoding(INVALID_QUANTITY));
        }
        parse_hex(digits)
    } else {
        let not_decimal = format!("{:?} is not a decimal quantity", input);
        let (_, digits) = decimal(input)
            .map_err(|e| Error::decoding_with_cause(not_decimal.clone(), describe(input, e)))?;
        digits
            .parse::<u128>()
            .map_err(|e| Error::decoding_with_cause(not_decimal, e))
    }
}

/// Renders a number as a 32 byte, zero padded, `0x` prefixed word.
pub fn to_bytes32_string(value: u128) -> String {
    format!("0x{:064x}", value)
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(pub u128);

impl Quantity {
    pub fn from_hex(input: &str) -> Result<Self> {
        decode_quantity(input).map(Self)
    }
}

impl From<u128> for Quantity {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode_quantity_lenient(&raw)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
