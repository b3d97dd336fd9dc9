use crate::encoding::error::{Error, Result};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;

/// Standard alphabet, no padding.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD_NO_PAD.encode(bytes)
}

/// URL safe alphabet, no padding.
pub fn to_base64_url_safe(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn pad_base64(input: &str) -> String {
    let padding = (4 - input.len() % 4) % 4;
    format!("{}{}", input, "=".repeat(padding))
}

/// Decodes standard or url safe base64, with or without padding.
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    let normalized: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    STANDARD
        .decode(pad_base64(&normalized))
        .map_err(|e| Error::decoding_with_cause(format!("{:?} is not valid base64", input), e))
}
