//! Error taxonomy for theme operations.

use std::io;
use std::path::PathBuf;

/// Every way a startheme invocation can fail.
///
/// "No configuration found" and "not managed by startheme" are states
/// reported by [`crate::switch::ConfigStatus`], never errors.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Failed to determine home directory")]
    HomeDirectory,

    #[error("Error reading themes directory {}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name}: No such file or directory")]
    ThemeNotFound { name: String },

    #[error("{name} is a directory")]
    ThemeIsDirectory { name: String },

    #[error("Error checking {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error removing existing config {}", path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating symlink {} -> {}", link.display(), target.display())]
    LinkCreateFailed {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading symlink {}", path.display())]
    Readlink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing arguments: {0}")]
    MissingArgument(String),

    #[error("Unknown subcommand: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ThemeError::ThemeNotFound {
            name: "dracula".to_string(),
        };
        assert_eq!(err.to_string(), "dracula: No such file or directory");
    }

    #[test]
    fn test_io_source_is_chained() {
        let err = ThemeError::RemoveFailed {
            path: PathBuf::from("/tmp/starship.toml"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/tmp/starship.toml"));
    }
}
