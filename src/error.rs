use serde_json::Value;
use thiserror::Error;

/// Errors produced by the guarded search/resolve flows and playback control.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend was unreachable or its response was not the expected
    /// envelope shape.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status. The payload it sent
    /// is carried verbatim.
    #[error("backend error: {payload}")]
    Backend { payload: Value },

    /// A newer operation of the same kind has already started. Not a
    /// user-visible failure — callers absorb this silently.
    #[error("superseded by a newer operation")]
    Superseded,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_carries_payload() {
        let err = Error::Backend {
            payload: serde_json::json!({"message": "no such track"}),
        };
        assert!(err.to_string().contains("no such track"));
    }

    #[test]
    fn test_superseded_is_not_described_as_a_failure() {
        let err = Error::Superseded;
        assert_eq!(err.to_string(), "superseded by a newer operation");
    }
}
