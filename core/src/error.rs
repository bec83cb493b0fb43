use std::fmt;
use thiserror::Error;

/// The error type for Rigel client operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<u16>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Request cannot be built or signed (malformed URL, etc.)
    RequestInvalid,

    /// Network-level failure; the request never produced a response
    TransportFailed,

    /// The service answered with a non-success status
    RemoteFailed,

    /// The service answered successfully but the body could not be decoded
    DeserializeFailed,

    /// A batch operation failed as a whole; no partial results exist
    BatchFailed,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status the service answered with
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Check if this error came back from the service rather than the client
    pub fn is_remote_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RemoteFailed | ErrorKind::DeserializeFailed
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a transport failed error
    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportFailed, message)
    }

    /// Create a remote failed error
    pub fn remote_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RemoteFailed, message)
    }

    /// Create a deserialize failed error
    pub fn deserialize_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeserializeFailed, message)
    }

    /// Create a batch failed error
    pub fn batch_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BatchFailed, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::TransportFailed => write!(f, "transport failed"),
            ErrorKind::RemoteFailed => write!(f, "service rejected request"),
            ErrorKind::DeserializeFailed => write!(f, "undecodable response"),
            ErrorKind::BatchFailed => write!(f, "batch operation failed"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
