//! Error type shared by the fallible helpers.

use thiserror::Error;

/// Error is returned by helpers that can fail: method invocation,
/// selectors built without enough information, and serialization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no method `{method}` on {kind}")]
    MissingMethod { method: String, kind: &'static str },

    #[error("method `{method}`: {message}")]
    InvalidArgument { method: String, message: String },

    #[error("a selector without a key needs a value to compare against")]
    MissingComparand,

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates a missing method error.
    pub fn missing_method(method: impl Into<String>, kind: &'static str) -> Self {
        Error::MissingMethod {
            method: method.into(),
            kind,
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(method: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            method: method.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
