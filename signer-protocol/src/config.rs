use crate::error::ProtocolResult;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_MAX_MESSAGE_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Upper bound, in bytes, of a framed message in either direction.
    pub max_message_len: usize,
    /// Reject quantities with leading zeroes or without a `0x` prefix.
    pub strict_quantities: bool,
    /// Emit `0x` in front of hex output.
    pub prefix_hex: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
            strict_quantities: true,
            prefix_hex: true,
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(raw: &str) -> ProtocolResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ProtocolResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading codec config");
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = CodecConfig::from_toml_str("max_message_len = 64\nprefix_hex = false").unwrap();
        assert_eq!(config.max_message_len, 64);
        assert!(!config.prefix_hex);
        assert!(config.strict_quantities);
    }

    #[test]
    fn unknown_field() {
        let err = CodecConfig::from_toml_str("max_len = 1").unwrap_err();
        assert!(matches!(err, ProtocolError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strict_quantities = false").unwrap();
        let config = CodecConfig::load(file.path()).unwrap();
        assert!(!config.strict_quantities);

        let dir = tempfile::tempdir().unwrap();
        let err = CodecConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ProtocolError::IO(_)));
    }
}
