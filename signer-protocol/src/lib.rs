//! Encoding and decoding failures for signer messages, together with the
//! hex, quantity and base64 helpers that raise them.

pub mod b64;
pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hex;
pub mod quantity;

pub use codec::Codec;
pub use config::CodecConfig;
pub use encoding::error::{DecodingFailure, EncodingFailure, Error, ErrorKind, Result};
pub use encoding::{Decoder, Encoder};
pub use error::{ProtocolError, ProtocolResult};

/// Installs a fmt subscriber filtered by `RUST_LOG`. Does nothing if one is already set.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_line_number(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_reach_callers() {
        init_tracing();
        init_tracing();

        let codec = Codec::default();
        match codec.decode_quantity("0x") {
            Err(Error::Decoding(failure)) => assert!(failure.cause().is_some()),
            other => panic!("unexpected {:?}", other),
        }
        match codec.encode_quantity(-1) {
            Err(Error::Encoding(failure)) => assert!(failure.cause().is_none()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
