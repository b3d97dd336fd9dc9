use crate::config::CodecConfig;
use crate::encoding::encoded_size::EncodedSize;
use crate::encoding::error::{Error, Result};
use crate::encoding::{Decoder, Encoder};
use crate::error::ProtocolResult;
use crate::hex::{hex_to_bytes, to_hex, to_prefixed_hex};
use crate::quantity::{decode_quantity, decode_quantity_lenient, encode_quantity};
use bytes::{Bytes, BytesMut};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

fn logged(err: Error) -> Error {
    debug!(kind = %err.kind(), reason = err.message(), "codec failure");
    err
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn from_config_file<P: AsRef<Path>>(path: P) -> ProtocolResult<Self> {
        Ok(Self::new(CodecConfig::load(path)?))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode_message<T>(&self, message: &T) -> Result<Bytes>
    where
        T: Encoder + EncodedSize + ?Sized,
    {
        let size = message.encoded_size();
        if size > self.config.max_message_len {
            return Err(logged(Error::encoding(format!(
                "message of {} bytes exceeds limit of {} bytes",
                size, self.config.max_message_len
            ))));
        }
        let mut buf = BytesMut::with_capacity(size);
        message.encode(&mut buf).map_err(logged)?;
        Ok(buf.freeze())
    }

    /// Decodes exactly one `T` from `bytes`; leftover input is an error.
    pub fn decode_message<T: Decoder>(&self, bytes: &[u8]) -> Result<T> {
        if bytes.len() > self.config.max_message_len {
            return Err(logged(Error::decoding(format!(
                "message of {} bytes exceeds limit of {} bytes",
                bytes.len(),
                self.config.max_message_len
            ))));
        }
        let mut reader = bytes;
        let value = T::decode(&mut reader).map_err(logged)?;
        if !reader.is_empty() {
            return Err(logged(Error::decoding(format!(
                "{} trailing bytes after message",
                reader.len()
            ))));
        }
        Ok(value)
    }

    pub fn encode_hex<T>(&self, message: &T) -> Result<String>
    where
        T: Encoder + EncodedSize + ?Sized,
    {
        let bytes = self.encode_message(message)?;
        Ok(if self.config.prefix_hex {
            to_prefixed_hex(&bytes)
        } else {
            to_hex(&bytes)
        })
    }

    pub fn decode_hex<T: Decoder>(&self, input: &str) -> Result<T> {
        let bytes = hex_to_bytes(input).map_err(logged)?;
        self.decode_message(&bytes)
    }

    pub fn encode_quantity(&self, value: i128) -> Result<String> {
        encode_quantity(value).map_err(logged)
    }

    pub fn decode_quantity(&self, input: &str) -> Result<u128> {
        let decoded = if self.config.strict_quantities {
            decode_quantity(input)
        } else {
            decode_quantity_lenient(input)
        };
        decoded.map_err(logged)
    }
}
