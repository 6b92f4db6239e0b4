//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing an expiring cache.
///
/// Lookups never fail: a miss is reported as `None`, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Retention or reap interval is not strictly positive
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// The reaper needs a Tokio runtime to be spawned on
    #[error("Cache must be created from within a Tokio runtime")]
    NoRuntime,
}

// == Client Error Enum ==
/// Errors that can occur when fetching pages from the PokeAPI.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("Unable to fetch: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {0} for {1}")]
    Status(u16, String),

    /// Response body was not the expected JSON document
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == REPL Error Enum ==
/// Errors returned by REPL command callbacks.
#[derive(Error, Debug)]
pub enum ReplError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Reading input or writing output failed; ends the session
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = CacheError::InvalidConfig("retention must be greater than zero".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid cache configuration: retention must be greater than zero"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status(404, "https://pokeapi.co/api/v2/nope".to_string());
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn test_repl_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReplError::from(ClientError::from(json_err));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}
