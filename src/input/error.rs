use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::input::guard::EncodingIssue;

/// Failures reading a title source. Detectors themselves never fail.
#[derive(Debug)]
pub enum InputError {
    /// The source could not be found.
    NotFound { path: PathBuf },
    /// Any other read failure (permissions, is a directory, ...).
    Io { path: PathBuf, source: io::Error },
    /// The bytes are not UTF-8 text.
    Encoding { path: PathBuf, issue: EncodingIssue },
}

impl InputError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => InputError::NotFound {
                path: path.to_path_buf(),
            },
            _ => InputError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Stable machine-readable code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            InputError::NotFound { .. } => "E_NOT_FOUND",
            InputError::Io { .. } => "E_IO",
            InputError::Encoding { .. } => "E_ENCODING",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            InputError::NotFound { path }
            | InputError::Io { path, .. }
            | InputError::Encoding { path, .. } => path,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFound { path } => {
                write!(f, "source not found: {}", path.display())
            }
            InputError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            InputError::Encoding { path, issue } => {
                write!(f, "cannot decode {}: {issue}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_its_own_code() {
        let err = InputError::from_io(
            Path::new("movies.txt"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.code(), "E_NOT_FOUND");
        assert_eq!(err.path(), Path::new("movies.txt"));
        assert_eq!(err.to_string(), "source not found: movies.txt");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = InputError::from_io(
            Path::new("movies.txt"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.code(), "E_IO");
        assert!(std::error::Error::source(&err).is_some());
    }
}
