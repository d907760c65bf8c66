/// Error type shared by every engine operation.
///
/// All failures are local and synchronous. None of them are worth retrying:
/// the computation is deterministic, so the same input fails the same way.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed distribution or value construction.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Structurally inconsistent table input.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("key not found in distribution: {key}")]
    KeyNotFound { key: String },

    #[error("group not found: {group}")]
    GroupNotFound { group: String },

    /// The seat total cannot be reached with at most one seat of adjustment per group.
    #[error("cannot reconcile a deficit of {deficit} seats across {groups} groups")]
    Infeasible { deficit: i64, groups: usize },

    #[error("invalid seat total: {total}")]
    InvalidTotal { total: i64 },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument { reason: reason.into() }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput { line, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Infeasible { deficit: -4, groups: 3 };
        assert_eq!(err.to_string(), "cannot reconcile a deficit of -4 seats across 3 groups");

        let err = Error::malformed(7, "expected 3 probabilities, got 2");
        assert_eq!(err.to_string(), "malformed input at line 7: expected 3 probabilities, got 2");

        let err = Error::GroupNotFound { group: "Purple".to_string() };
        assert_eq!(err.to_string(), "group not found: Purple");
    }
}
