//! Bindless boilerplate generator library
//!
//! Emits the `_Image.get_dimensions` overloads of the bindless Slang module,
//! one extension block per legal shape/array/multisample/access combination.

pub mod domain;
pub mod emit;
pub mod error;
pub mod generator;
pub mod output;
pub mod params;
pub mod traversal;

use std::io;
use std::path::Path;

use tracing::info;

pub use domain::{
    AccessMode, ArrayVariant, DomainTables, ElementType, Multisample, Shape, ShapeSpec,
};
pub use error::GenError;
pub use generator::{EmissionStats, Generator, Method};
pub use output::OutputDocument;

/// Generated file, relative to the working directory
pub const OUTPUT_FILE: &str = "gen_get_dimensions.slang";

/// State of a generated file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    InSync,
    OutOfSync,
    Missing,
}

/// Render the source for the standard domain tables
pub fn generate_source() -> Result<String, GenError> {
    Ok(Generator::standard()?.render().finish())
}

/// Generate the standard source and atomically replace `path` with it
pub fn write_to(path: &Path) -> Result<EmissionStats, GenError> {
    let generator = Generator::standard()?;
    let source = generator.render().finish();
    output::write_atomically(path, &source)?;

    let stats = generator.stats();
    info!(
        path = %path.display(),
        blocks = stats.blocks,
        methods = stats.methods,
        mip_level_methods = stats.mip_level_methods,
        "wrote generated source"
    );
    Ok(stats)
}

/// Check whether the file at `path` matches freshly generated source
pub fn check_at(path: &Path) -> Result<SyncStatus, GenError> {
    let fresh = generate_source()?;

    match std::fs::read(path) {
        Ok(existing) if existing == fresh.as_bytes() => Ok(SyncStatus::InSync),
        Ok(_) => Ok(SyncStatus::OutOfSync),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SyncStatus::Missing),
        Err(source) => Err(GenError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
