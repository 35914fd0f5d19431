use std::io;
use std::path::PathBuf;

/// Error type for boilerplate generation failures
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Domain tables disagree with each other (authoring bug, caught before any text is built)
    #[error("inconsistent domain tables: {0}")]
    Inconsistent(String),

    /// Generated source could not be written or moved into place
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing generated source could not be read back for comparison
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
