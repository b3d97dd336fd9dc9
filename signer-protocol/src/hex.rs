use crate::encoding::encoded_size::EncodedSize;
use crate::encoding::error::{Error, Result};
use crate::encoding::{ensure_readable, ensure_writable, Decoder, Encoder};
use bytes::{Buf, BufMut};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::hex_digit0;
use nom::combinator::{eof, opt};
use nom::error::{context, convert_error, VerboseError};
use nom::sequence::{preceded, terminated};

pub(crate) type IResult<I, O> = nom::IResult<I, O, VerboseError<I>>;

pub const BYTES32_LEN: usize = 32;
const BYTES32_HEX_LEN: usize = BYTES32_LEN * 2;

pub fn has_0x_prefix(input: &str) -> bool {
    input.starts_with("0x") || input.starts_with("0X")
}

pub fn clean_0x_prefix(input: &str) -> &str {
    if has_0x_prefix(input) {
        &input[2..]
    } else {
        input
    }
}

pub fn prepend_0x_prefix(input: &str) -> String {
    if has_0x_prefix(input) {
        input.to_string()
    } else {
        format!("0x{}", input)
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", to_hex(bytes))
}

pub(crate) fn prefix(i: &str) -> IResult<&str, &str> {
    context("0x prefix", alt((tag("0x"), tag("0X"))))(i)
}

fn hex_string(i: &str) -> IResult<&str, &str> {
    context("hex string", preceded(opt(prefix), terminated(hex_digit0, eof)))(i)
}

pub(crate) fn describe(input: &str, err: nom::Err<VerboseError<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => convert_error(input, e),
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
    }
}

/// Returns the hex digits of `input` without prefix, rejecting non-hex characters.
pub(crate) fn hex_digits(input: &str) -> Result<&str> {
    hex_string(input)
        .map(|(_, digits)| digits)
        .map_err(|e| {
            Error::decoding_with_cause(format!("{:?} is not a hex string", input), describe(input, e))
        })
}

fn not_hex(input: &str, err: ::hex::FromHexError) -> Error {
    Error::decoding_with_cause(format!("{:?} is not a hex string", input), err)
}

pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    ::hex::decode(clean_0x_prefix(input)).map_err(|e| not_hex(input, e))
}

/// Left-pads a hex string with zeroes until it represents at least 32 bytes.
pub fn hex_to_bytes32(input: &str) -> String {
    format!(
        "0x{:0>width$}",
        clean_0x_prefix(input),
        width = BYTES32_HEX_LEN
    )
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bytes32(pub [u8; BYTES32_LEN]);

impl Bytes32 {
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = clean_0x_prefix(input);
        if digits.len() > BYTES32_HEX_LEN {
            return Err(Error::decoding(format!(
                "{} hex digits don't fit in {} bytes",
                digits.len(),
                BYTES32_LEN
            )));
        }
        let padded = format!("{:0>width$}", digits, width = BYTES32_HEX_LEN);
        let mut word = [0u8; BYTES32_LEN];
        ::hex::decode_to_slice(&padded, &mut word).map_err(|e| not_hex(input, e))?;
        Ok(Self(word))
    }

    pub fn to_hex_string(&self) -> String {
        to_prefixed_hex(&self.0)
    }

    /// Interprets the word as UTF-8 text with trailing NUL padding removed.
    pub fn to_utf8_lossy_trimmed(&self) -> String {
        String::from_utf8_lossy(&self.0)
            .trim_end_matches('\0')
            .to_string()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BYTES32_LEN]> for Bytes32 {
    fn from(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl Encoder for Bytes32 {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut,
    {
        ensure_writable(buf, BYTES32_LEN, "bytes32")?;
        buf.put_slice(&self.0);
        Ok(())
    }
}

impl Decoder for Bytes32 {
    fn decode<B>(buf: &mut B) -> Result<Self>
    where
        B: Buf,
    {
        ensure_readable(buf, BYTES32_LEN, "bytes32")?;
        let mut word = [0u8; BYTES32_LEN];
        buf.copy_to_slice(&mut word);
        Ok(Self(word))
    }
}

impl EncodedSize for Bytes32 {
    fn encoded_size(&self) -> usize {
        BYTES32_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::hex::FromHexError;

    #[test]
    fn prefix_handling() {
        assert_eq!(clean_0x_prefix("0xabc"), "abc");
        assert_eq!(clean_0x_prefix("0Xabc"), "abc");
        assert_eq!(clean_0x_prefix("abc"), "abc");
        assert_eq!(prepend_0x_prefix("abc"), "0xabc");
        assert_eq!(prepend_0x_prefix("0xabc"), "0xabc");
    }

    #[test]
    fn bytes_to_hex() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xff]), "000fff");
        assert_eq!(to_prefixed_hex(&[]), "0x");
    }

    #[test]
    fn hex_to_bytes_accepts_prefix() {
        assert_eq!(hex_to_bytes("0x000fff").unwrap(), vec![0x00, 0x0f, 0xff]);
        assert_eq!(hex_to_bytes("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_to_bytes_rejects_garbage() {
        let err = hex_to_bytes("0xzz").unwrap_err();
        assert!(err.is_decoding());
        assert_eq!(err.message(), "\"0xzz\" is not a hex string");
        assert_eq!(
            err.cause().unwrap().downcast_ref::<FromHexError>(),
            Some(&FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );

        let err = hex_to_bytes("0xabc").unwrap_err();
        assert!(err.is_decoding());
        assert_eq!(
            err.cause().unwrap().downcast_ref::<FromHexError>(),
            Some(&FromHexError::OddLength)
        );
    }

    #[test]
    fn pads_to_bytes32() {
        assert_eq!(
            hex_to_bytes32("0x1"),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(hex_to_bytes32("ab"), hex_to_bytes32("0xab"));

        let long = "1".repeat(66);
        assert_eq!(hex_to_bytes32(&format!("0x{}", long)), format!("0x{}", long));
    }

    #[test]
    fn bytes32_word() {
        let word = Bytes32::from_hex("0x6869").unwrap();
        assert_eq!(word.0[30..], [0x68, 0x69]);
        assert_eq!(
            word.to_hex_string(),
            "0x0000000000000000000000000000000000000000000000000000000000006869"
        );

        let mut text = [0u8; BYTES32_LEN];
        text[..5].copy_from_slice(b"hello");
        assert_eq!(Bytes32::from(text).to_utf8_lossy_trimmed(), "hello");

        assert!(Bytes32::from_hex(&"f".repeat(66)).unwrap_err().is_decoding());
        let err = Bytes32::from_hex("0xg1").unwrap_err();
        assert!(err.cause().unwrap().downcast_ref::<FromHexError>().is_some());
    }

    #[test]
    fn bytes32_binary() {
        let word = Bytes32([7; BYTES32_LEN]);
        let mut buffer = Vec::new();
        word.encode(&mut buffer).unwrap();
        assert_eq!(buffer.len(), word.encoded_size());
        assert_eq!(Bytes32::decode(&mut buffer.as_slice()).unwrap(), word);

        let err = Bytes32::decode(&mut &buffer[..31]).unwrap_err();
        assert!(err.is_decoding());
    }
}
