/*!
# Error System for License Swap

Typed errors for the header pipeline and the batch run. Setup problems
(bad directory, exemplar without a header, bad threshold or config file)
are distinguished from per-file I/O failures so the binary can map them
to the right process exit code.
*/

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code for a fatal I/O failure in the middle of a run
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for invalid setup, reported before any candidate file is touched
pub const EXIT_SETUP: i32 = 2;

/// Which exemplar a setup error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemplarRole {
    /// The "old" header pattern
    Source,
    /// The "new" header content
    Target,
}

impl fmt::Display for ExemplarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExemplarRole::Source => write!(f, "Source"),
            ExemplarRole::Target => write!(f, "Target"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LicenseSwapError {
    #[error("Not a directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("{role} exemplar has no leading comment header: {}", .path.display())]
    MissingExemplarHeader { role: ExemplarRole, path: PathBuf },

    #[error("Similarity threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Unknown header style: {0:?} (expected \"line\" or \"block\")")]
    UnknownStyle(String),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl LicenseSwapError {
    /// Wraps an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LicenseSwapError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for problems detected before any candidate file is read
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            LicenseSwapError::DirectoryNotFound(_)
                | LicenseSwapError::MissingExemplarHeader { .. }
                | LicenseSwapError::InvalidThreshold(_)
                | LicenseSwapError::Config { .. }
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_setup_error() {
            EXIT_SETUP
        } else {
            EXIT_FAILURE
        }
    }
}

pub type Result<T> = std::result::Result<T, LicenseSwapError>;
