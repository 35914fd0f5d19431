//! Traversal driver: turns validated domain tables into an output document

use tracing::debug;

use crate::domain::{DomainTables, ElementType};
use crate::emit;
use crate::error::GenError;
use crate::output::OutputDocument;
use crate::params::{self, Overload, OverloadKind};
use crate::traversal::{self, Combination};

/// One emitted method: a block, the element type, and the signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub combination: Combination,
    pub element: ElementType,
    pub overload: Overload,
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmissionStats {
    pub blocks: usize,
    pub methods: usize,
    pub mip_level_methods: usize,
}

/// Generator over a validated set of domain tables
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    tables: DomainTables,
}

impl Generator {
    /// Validate `tables` and build a generator over them.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Inconsistent` if the tables fail validation.
    pub fn new(tables: DomainTables) -> Result<Self, GenError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// Generator over [`DomainTables::STANDARD`]
    pub fn standard() -> Result<Self, GenError> {
        Self::new(DomainTables::STANDARD)
    }

    pub fn tables(&self) -> &DomainTables {
        &self.tables
    }

    pub fn combinations(&self) -> impl Iterator<Item = Combination> + use<> {
        traversal::combinations(&self.tables)
    }

    /// Every method in emission order: per block, per element type, plain
    /// overload before the mip-level one.
    pub fn methods(&self) -> impl Iterator<Item = Method> + use<> {
        let element_types = self.tables.element_types;
        self.combinations().flat_map(move |combination| {
            let overloads = params::overloads(&combination);
            element_types.iter().flat_map(move |&element| {
                overloads.clone().into_iter().map(move |overload| Method {
                    combination,
                    element,
                    overload,
                })
            })
        })
    }

    pub fn stats(&self) -> EmissionStats {
        let mut stats = EmissionStats {
            blocks: self.combinations().count(),
            ..EmissionStats::default()
        };
        for method in self.methods() {
            stats.methods += 1;
            if method.overload.kind == OverloadKind::DimensionsAtMipLevel {
                stats.mip_level_methods += 1;
            }
        }
        stats
    }

    /// Render the full document
    pub fn render(&self) -> OutputDocument {
        let mut doc = OutputDocument::new();
        doc.push(emit::FILE_HEADER);
        doc.push(emit::MODULE_DECL);

        for combination in self.combinations() {
            debug!(
                shape = %combination.shape(),
                array = combination.array.flag(),
                ms = combination.multisample.flag(),
                descriptors = combination.access.descriptor_array(),
                "emitting block"
            );

            doc.push(emit::block_comment(&combination));
            doc.extend(emit::block_header(&combination));

            let overloads = params::overloads(&combination);
            for &element in self.tables.element_types {
                for overload in &overloads {
                    doc.extend(emit::method(overload, element));
                }
            }

            doc.push(emit::BLOCK_CLOSE);
        }

        doc
    }
}
