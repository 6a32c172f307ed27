use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediasortError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to copy files: {count} files failed\n{0}", count = .0.len())]
    CopyFailed(CopyFailures),

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot determine file name of {0}")]
    NoFileName(PathBuf),

    #[error("Failed to read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    // Date errors
    #[error("Month out of range: {0} (expected 1-12)")]
    InvalidMonth(u8),

    // Argument errors
    #[error("Days argument must be a non-negative integer or 'all', got '{0}'")]
    InvalidDays(String),
}

/// Details about files that failed to copy.
#[derive(Debug)]
pub struct CopyFailures {
    pub failures: Vec<CopyFailure>,
}

#[derive(Debug)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: MediasortError,
}

impl std::fmt::Display for CopyFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(
                f,
                "  {} -> {}: {}",
                failure.source.display(),
                failure.destination.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}

impl CopyFailures {
    pub fn new() -> Self {
        Self { failures: Vec::new() }
    }

    pub fn add(&mut self, source: PathBuf, destination: PathBuf, error: MediasortError) {
        self.failures.push(CopyFailure {
            source,
            destination,
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

impl Default for CopyFailures {
    fn default() -> Self {
        Self::new()
    }
}

/// Result type for mediasort operations.
pub type Result<T> = std::result::Result<T, MediasortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_failures_display() {
        let mut failures = CopyFailures::new();
        assert!(failures.is_empty());

        failures.add(
            PathBuf::from("/src/a.jpg"),
            PathBuf::from("/dest/2024/01-January"),
            MediasortError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )),
        );

        assert_eq!(failures.len(), 1);
        let rendered = failures.to_string();
        assert!(rendered.contains("/src/a.jpg -> /dest/2024/01-January"));
        assert!(rendered.contains("denied"));

        let err = MediasortError::CopyFailed(failures);
        assert!(err.to_string().starts_with("Failed to copy files: 1 files failed"));
    }
}
