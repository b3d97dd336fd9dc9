use crate::encoding;
use crate::encoding::error::{DecodingFailure, EncodingFailure};
use thiserror::Error;

pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("[Codec]: {0}")]
    Codec(#[from] encoding::error::Error),
    #[error("[IO]: {0}")]
    IO(#[from] std::io::Error),
    #[error("[Config]: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<EncodingFailure> for ProtocolError {
    fn from(failure: EncodingFailure) -> Self {
        ProtocolError::Codec(failure.into())
    }
}

impl From<DecodingFailure> for ProtocolError {
    fn from(failure: DecodingFailure) -> Self {
        ProtocolError::Codec(failure.into())
    }
}
