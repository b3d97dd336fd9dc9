use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

macro_rules! failure_kind {
    ($($(#[$meta:meta])* $name:ident);+$(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Error, Debug)]
            #[error("{message}")]
            pub struct $name {
                message: String,
                #[source]
                cause: Option<BoxError>,
            }

            impl $name {
                pub fn new<M: Into<String>>(message: M) -> Self {
                    Self {
                        message: message.into(),
                        cause: None,
                    }
                }

                pub fn with_cause<M, C>(message: M, cause: C) -> Self
                where
                    M: Into<String>,
                    C: Into<BoxError>,
                {
                    Self {
                        message: message.into(),
                        cause: Some(cause.into()),
                    }
                }

                pub fn message(&self) -> &str {
                    &self.message
                }

                pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
                    self.cause.as_deref()
                }

                pub fn into_cause(self) -> Option<BoxError> {
                    self.cause
                }
            }
        )+
    };
}

failure_kind! {
    /// Producing a message representation failed.
    EncodingFailure;
    /// Parsing a message representation failed.
    DecodingFailure;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Encoding,
    Decoding,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Encoding => write!(f, "encode"),
            ErrorKind::Decoding => write!(f, "decode"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("encode error: {0}")]
    Encoding(#[from] EncodingFailure),
    #[error("decode error: {0}")]
    Decoding(#[from] DecodingFailure),
}

impl Error {
    pub fn encoding<M: Into<String>>(message: M) -> Self {
        Error::Encoding(EncodingFailure::new(message))
    }

    pub fn encoding_with_cause<M, C>(message: M, cause: C) -> Self
    where
        M: Into<String>,
        C: Into<BoxError>,
    {
        Error::Encoding(EncodingFailure::with_cause(message, cause))
    }

    pub fn decoding<M: Into<String>>(message: M) -> Self {
        Error::Decoding(DecodingFailure::new(message))
    }

    pub fn decoding_with_cause<M, C>(message: M, cause: C) -> Self
    where
        M: Into<String>,
        C: Into<BoxError>,
    {
        Error::Decoding(DecodingFailure::with_cause(message, cause))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encoding(_) => ErrorKind::Encoding,
            Error::Decoding(_) => ErrorKind::Decoding,
        }
    }

    pub fn is_encoding(&self) -> bool {
        self.kind() == ErrorKind::Encoding
    }

    pub fn is_decoding(&self) -> bool {
        self.kind() == ErrorKind::Decoding
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Encoding(failure) => failure.message(),
            Error::Decoding(failure) => failure.message(),
        }
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Encoding(failure) => failure.cause(),
            Error::Decoding(failure) => failure.cause(),
        }
    }
}
