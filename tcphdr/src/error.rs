use std::io;
use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding, loading or storing a header.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not exactly one fixed-size header.
    #[error("malformed tcp header: expected 20 bytes, got {len}")]
    MalformedHeader {
        /// Number of bytes actually supplied.
        len: usize,
    },

    /// The header blob could not be read from or written to `path`.
    #[error("header i/o failed on {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(len: usize) -> Self {
        Self::MalformedHeader { len }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a malformed input buffer.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedHeader { .. })
    }
}
