//! Core error types for ramify.

use thiserror::Error;

/// Result type alias using `RamifyError`.
pub type RamifyResult<T> = std::result::Result<T, RamifyError>;

/// Core error type for graph operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RamifyError {
    /// Edge or path resolution failed.
    ///
    /// `path` is the full prefix consumed up to and including the segment
    /// that could not be resolved, so a miss at the root and a miss three
    /// levels down are distinguishable.
    #[error("NotFound: {}", display_path(.path))]
    NotFound {
        /// Keys consumed from the starting node.
        path: Vec<String>,
    },

    /// A mutation would have replaced an existing edge.
    #[error("DuplicateKey: {0}")]
    DuplicateKey(String),

    /// Two flat entries normalize to the same path.
    #[error("DuplicatePath: {0}")]
    DuplicatePath(String),

    /// A mutation needed a non-empty path.
    #[error("EmptyPath: {0}")]
    EmptyPath(String),

    /// The node representation lacks the requested capability.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Strict zip/merge found diverging structure; carries the offending key.
    #[error("StructureMismatch: {0}")]
    StructureMismatch(String),

    /// A value did not have the shape an operation needs.
    #[error("InvalidValue: {0}")]
    InvalidValue(String),

    /// JSON conversion error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

fn display_path(path: &[String]) -> String {
    format!("'{}'", path.join("/"))
}

impl RamifyError {
    /// Create a new `NotFound` error for a consumed path prefix.
    pub fn not_found<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotFound {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new `DuplicateKey` error.
    pub fn duplicate_key<S: Into<String>>(key: S) -> Self {
        Self::DuplicateKey(key.into())
    }

    /// Create a new `DuplicatePath` error.
    pub fn duplicate_path<S: Into<String>>(path: S) -> Self {
        Self::DuplicatePath(path.into())
    }

    /// Create a new `EmptyPath` error.
    pub fn empty_path<S: Into<String>>(msg: S) -> Self {
        Self::EmptyPath(msg.into())
    }

    /// Create a new `Unsupported` error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a new `StructureMismatch` error naming the offending key.
    pub fn structure_mismatch<S: Into<String>>(key: S) -> Self {
        Self::StructureMismatch(key.into())
    }

    /// Create a new `InvalidValue` error.
    pub fn invalid_value<S: Into<String>>(msg: S) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Whether this is a `NotFound` error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The consumed path of a `NotFound` error.
    pub fn missing_path(&self) -> Option<&[String]> {
        match self {
            Self::NotFound { path } => Some(path),
            _ => None,
        }
    }

    /// Prefix the path of a `NotFound` error with the keys consumed before it.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn within(self, prefix: &[String]) -> Self {
        match self {
            Self::NotFound { path } => Self::NotFound {
                path: prefix.iter().cloned().chain(path).collect(),
            },
            other => other,
        }
    }
}

/// Ensure a condition holds, returning the given error variant if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::RamifyError::$variant(format!($($msg)*)));
        }
    };
}

/// Return early with an `Unsupported` error.
#[macro_export]
macro_rules! unsupported {
    ($($arg:tt)*) => {
        return Err($crate::RamifyError::Unsupported(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RamifyError::duplicate_key("foo");
        assert_eq!(err.to_string(), "DuplicateKey: foo");

        let err = RamifyError::not_found(["a", "b", "c"]);
        assert_eq!(err.to_string(), "NotFound: 'a/b/c'");
    }

    #[test]
    fn test_error_constructors() {
        let _ = RamifyError::duplicate_path("foo/bar");
        let _ = RamifyError::empty_path("cannot set the value of an empty path");
        let _ = RamifyError::unsupported("clone_with");
        let _ = RamifyError::structure_mismatch("b");
        let _ = RamifyError::invalid_value("expected a tuple of 2 values");
    }

    #[test]
    fn test_not_found_within_prefix() {
        let err = RamifyError::not_found(["c"]).within(&["a".to_string(), "b".to_string()]);
        assert!(err.is_not_found());
        assert_eq!(
            err.missing_path(),
            Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
        );

        let other = RamifyError::duplicate_key("x").within(&["a".to_string()]);
        assert!(!other.is_not_found());
        assert_eq!(other.missing_path(), None);
    }

    #[test]
    fn test_macros() {
        fn check(flag: bool) -> RamifyResult<()> {
            ensure!(flag, StructureMismatch: "key {}", "b");
            Ok(())
        }
        fn never() -> RamifyResult<()> {
            unsupported!("clone_with on {}", "ZippedNode");
        }

        assert!(check(true).is_ok());
        assert_eq!(
            check(false).unwrap_err().to_string(),
            "StructureMismatch: key b"
        );
        assert_eq!(
            never().unwrap_err().to_string(),
            "Unsupported: clone_with on ZippedNode"
        );
    }
}
