use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No movie carries the requested title.
    #[error("Movie not found.")]
    NotFound { title: String },

    #[error("could not load movies from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The destination could not be written, e.g. permission denied or disk full.
    #[error("could not save movies to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
