//! Deterministic enumeration of legal combinations

use crate::domain::{AccessMode, ArrayVariant, DomainTables, Multisample, Shape, ShapeSpec};

/// One `(shape, array, multisample, access)` selection, i.e. one emitted block.
///
/// Element types are the innermost axis and are iterated inside the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub spec: &'static ShapeSpec,
    pub array: ArrayVariant,
    pub multisample: Multisample,
    pub access: AccessMode,
}

impl Combination {
    pub fn shape(&self) -> Shape {
        self.spec.shape
    }
}

/// Walk every combination the tables allow.
///
/// Order, outer to inner: shape, the shape's array variants, the shape's
/// multisample flags, access mode. Output ordering depends on this.
pub fn combinations(tables: &DomainTables) -> impl Iterator<Item = Combination> + use<> {
    let access_modes = tables.access_modes;
    tables.shapes.iter().flat_map(move |spec| {
        spec.array_variants.iter().flat_map(move |&array| {
            spec.multisample.iter().flat_map(move |&multisample| {
                access_modes.iter().map(move |&access| Combination {
                    spec,
                    array,
                    multisample,
                    access,
                })
            })
        })
    })
}
