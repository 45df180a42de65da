//! Custom error types for translation operations

use std::sync::Arc;
use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Source or target language could not be resolved
    #[error("Unsupported language(s): {}", quote_all(.languages))]
    UnsupportedLanguage {
        /// Every identifier that failed to resolve, in input order
        languages: Vec<String>,
    },

    /// Auth endpoint call failed or its credential could not be decoded
    #[error("Failed to fetch auth token")]
    AuthError {
        /// Cause, shared by every caller awaiting the same fetch
        #[source]
        source: Arc<AuthFetchError>,
    },

    /// Translate endpoint answered with a non-success status
    #[error("Request failed with status {status}: {status_text}\n{body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        status_text: String,
        /// Response body, pretty-printed when it is JSON
        body: String,
    },

    /// Caller-supplied header could not be encoded
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// Header name
        name: String,
        /// Encoding failure
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the response
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Offending setting and why
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

impl From<AuthFetchError> for TranslationError {
    fn from(err: AuthFetchError) -> Self {
        TranslationError::AuthError {
            source: Arc::new(err),
        }
    }
}

/// Failures of a single auth token fetch.
///
/// Shared between every caller awaiting the same fetch, so it travels behind
/// an `Arc` once it leaves the fetch future.
#[derive(Error, Debug)]
pub enum AuthFetchError {
    /// Transport failure talking to the auth endpoint
    #[error("auth request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Auth endpoint answered with a non-success status
    #[error("auth endpoint returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Credential is not a dot-delimited signed payload with an `exp` claim
    #[error("malformed credential: {message}")]
    MalformedCredential {
        /// What was missing or invalid
        message: String,
    },

    /// Payload segment is not valid base64
    #[error("credential payload is not base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Payload segment is not JSON
    #[error("credential payload is not JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

fn quote_all(languages: &[String]) -> String {
    languages
        .iter()
        .map(|l| format!("'{}'", l))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
