use std::fmt;

use thiserror::Error;

/// Failure reported by a compression backend.
/// - `code` is the backend's raw error code when it has one (libzstd does,
///   flate2 and lz4_flex do not).
/// - `message` is the backend's name for the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub code: Option<usize>,
    pub message: String,
}

impl BackendError {
    pub fn with_code(code: usize, message: impl Into<String>) -> Self {
        Self { code: Some(code), message: message.into() }
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (error code {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for BackendError {}

/// Unified codec error.
/// - Option setters fail synchronously with `InvalidArgument` / `IllegalState`.
/// - Backend failures keep the backend's code as the error source.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value outside what the backend or a region accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Mutation of a locked options instance.
    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("{codec} compression failed: {source}")]
    CompressionFailure {
        codec: &'static str,
        #[source]
        source: BackendError,
    },

    #[error("{codec} decompression failed: {source}")]
    DecompressionFailure {
        codec: &'static str,
        #[source]
        source: BackendError,
    },

    /// Raw kind id with no codec behind it.
    #[error("unsupported compression kind: {0}")]
    UnsupportedKind(String),

    #[error("invalid codec config: {0}")]
    Config(#[from] serde_json::Error),
}

impl CodecError {
    /// Backend error code carried by a compression/decompression failure.
    pub fn backend_code(&self) -> Option<usize> {
        match self {
            CodecError::CompressionFailure { source, .. }
            | CodecError::DecompressionFailure { source, .. } => source.code,
            _ => None,
        }
    }
}
