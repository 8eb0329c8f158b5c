use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the mining core: input adapters and threshold config.
///
/// Mining itself never fails; these cover everything that feeds it.
#[derive(Debug, Error)]
pub enum FpError {
    #[error("relative support must lie within [0, 1], got {0}")]
    InvalidSupport(f64),

    #[error("cannot parse support value '{0}'")]
    ParseSupport(String),

    #[error("incidence matrix has {columns} columns but {labels} labels were given")]
    LabelMismatch { columns: usize, labels: usize },

    #[error("failed to read transactions from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read transactions: {0}")]
    Read(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FpError>;
