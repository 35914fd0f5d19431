//! Append-only output buffer and atomic file replacement

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GenError;

/// Ordered text fragments, joined with newlines when finished
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    fragments: Vec<String>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn extend<I>(&mut self, fragments: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fragments.extend(fragments.into_iter().map(Into::into));
    }

    #[cfg(test)]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Join every fragment into the final source text
    pub fn finish(self) -> String {
        self.fragments.join("\n")
    }
}

/// Replace `path` with `contents` in one step.
///
/// The text goes to a temporary file next to `path`, which is then renamed
/// over the target. On failure the temporary file is removed and any previous
/// file at `path` is left as it was.
///
/// # Errors
///
/// Returns `GenError::Write` if the temporary file cannot be created, written
/// or renamed.
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), GenError> {
    let write_error = |source: io::Error| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;

    // Temp files are created owner-only; keep whatever the previous artifact had.
    if let Ok(metadata) = fs::metadata(path)
        && metadata.is_file()
    {
        fs::set_permissions(file.path(), metadata.permissions()).map_err(write_error)?;
    }

    file.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
