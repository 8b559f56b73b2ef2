use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeerFmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Already exists: {path}")]
    FileExists { path: PathBuf },

    #[error("Copy failed: {src} -> {dest}: {reason}")]
    CopyFailed {
        src: PathBuf,
        dest: PathBuf,
        reason: String,
    },

    #[error("Source and destination are the same: {path}")]
    SameSourceAndDest { path: PathBuf },

    #[error("Invalid entry name: {name:?}")]
    InvalidName { name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeerFmError {
    /// io::Error를 경로 정보가 있는 에러로 변환
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DeerFmError::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => DeerFmError::PermissionDenied {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::AlreadyExists => DeerFmError::FileExists {
                path: path.to_path_buf(),
            },
            _ => DeerFmError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeerFmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::Path;

    #[test]
    fn test_from_io_maps_kinds_with_path() {
        let path = Path::new("/tmp/x");
        match DeerFmError::from_io(Error::from(ErrorKind::NotFound), path) {
            DeerFmError::PathNotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected PathNotFound, got {:?}", other),
        }
        assert!(matches!(
            DeerFmError::from_io(Error::from(ErrorKind::PermissionDenied), path),
            DeerFmError::PermissionDenied { .. }
        ));
        assert!(matches!(
            DeerFmError::from_io(Error::from(ErrorKind::AlreadyExists), path),
            DeerFmError::FileExists { .. }
        ));
        assert!(matches!(
            DeerFmError::from_io(Error::from(ErrorKind::Interrupted), path),
            DeerFmError::Io(_)
        ));
    }
}
