//! Value domains for the `_Image.get_dimensions` overload family
//!
//! Every axis the generator multiplies over is a closed enum, and the
//! per-shape restrictions (which array variants and multisample flags a
//! shape supports, which positional dimensions it reports) live together in
//! one [`ShapeSpec`] record. A shape/multisample pairing the tables don't
//! list simply never gets enumerated.

use std::fmt;

use crate::error::GenError;
use crate::params::RESERVED_PARAMS;

/// Topological class of a texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    OneD,
    TwoD,
    ThreeD,
    Cube,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::OneD, Shape::TwoD, Shape::ThreeD, Shape::Cube];

    /// Suffix used by the library's `__Shape*` tag types
    pub fn suffix(self) -> &'static str {
        match self {
            Shape::OneD => "1D",
            Shape::TwoD => "2D",
            Shape::ThreeD => "3D",
            Shape::Cube => "Cube",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Single surface or layered collection of surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayVariant {
    NonArray,
    Array,
}

impl ArrayVariant {
    /// Value of the `isArray` generic argument
    pub fn flag(self) -> u8 {
        match self {
            ArrayVariant::NonArray => 0,
            ArrayVariant::Array => 1,
        }
    }

    pub fn is_array(self) -> bool {
        self == ArrayVariant::Array
    }

    pub fn label(self) -> &'static str {
        match self {
            ArrayVariant::NonArray => "Non-array",
            ArrayVariant::Array => "Array",
        }
    }
}

/// Whether an image stores several samples per texel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multisample {
    Single,
    Multi,
}

impl Multisample {
    /// Value of the `isMS` generic argument
    pub fn flag(self) -> u8 {
        match self {
            Multisample::Single => 0,
            Multisample::Multi => 1,
        }
    }

    pub fn is_multisampled(self) -> bool {
        self == Multisample::Multi
    }

    pub fn label(self) -> &'static str {
        match self {
            Multisample::Single => "Non-MS",
            Multisample::Multi => "MS",
        }
    }

    /// Whether images of this kind can be queried per mip level.
    ///
    /// A multisampled image has exactly one mip level, so it never gets the
    /// `get_dimensions(uint mipLevel, ...)` overload.
    pub fn has_mip_levels(self) -> bool {
        !self.is_multisampled()
    }
}

/// How the generated accessor treats the bound image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

impl AccessMode {
    /// Value of the `access` generic argument
    pub fn code(self) -> u8 {
        match self {
            AccessMode::ReadOnly => 0,
            AccessMode::ReadWrite => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccessMode::ReadOnly => "Read-Only",
            AccessMode::ReadWrite => "Read/Write",
        }
    }

    /// Descriptor array that `get()` resolves the image handle through
    pub fn descriptor_array(self) -> &'static str {
        match self {
            AccessMode::ReadOnly => "Images",
            AccessMode::ReadWrite => "RWImages",
        }
    }
}

/// Scalar type the dimensions are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Float,
    Int,
    Uint,
}

impl ElementType {
    pub fn keyword(self) -> &'static str {
        match self {
            ElementType::Float => "float",
            ElementType::Int => "int",
            ElementType::Uint => "uint",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Everything the generator knows about one shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    pub shape: Shape,
    pub array_variants: &'static [ArrayVariant],
    pub multisample: &'static [Multisample],
    /// Dimensions reported for a single surface, in output order
    pub positional_params: &'static [&'static str],
}

/// The complete set of axes the generator enumerates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainTables {
    pub shapes: &'static [ShapeSpec],
    pub access_modes: &'static [AccessMode],
    pub element_types: &'static [ElementType],
}

impl DomainTables {
    /// Tables matching the image types declared by the bindless library.
    ///
    /// 3D images have no array variant; only 2D images can be multisampled.
    pub const STANDARD: DomainTables = DomainTables {
        shapes: &[
            ShapeSpec {
                shape: Shape::OneD,
                array_variants: &[ArrayVariant::NonArray, ArrayVariant::Array],
                multisample: &[Multisample::Single],
                positional_params: &["width"],
            },
            ShapeSpec {
                shape: Shape::TwoD,
                array_variants: &[ArrayVariant::NonArray, ArrayVariant::Array],
                multisample: &[Multisample::Single, Multisample::Multi],
                positional_params: &["width", "height"],
            },
            ShapeSpec {
                shape: Shape::ThreeD,
                array_variants: &[ArrayVariant::NonArray],
                multisample: &[Multisample::Single],
                positional_params: &["width", "height", "depth"],
            },
            ShapeSpec {
                shape: Shape::Cube,
                array_variants: &[ArrayVariant::NonArray, ArrayVariant::Array],
                multisample: &[Multisample::Single],
                positional_params: &["width", "height"],
            },
        ],
        access_modes: &[AccessMode::ReadOnly, AccessMode::ReadWrite],
        element_types: &[ElementType::Float, ElementType::Int, ElementType::Uint],
    };

    /// Look up the spec for a shape
    pub fn spec(&self, shape: Shape) -> Option<&'static ShapeSpec> {
        self.shapes.iter().find(|spec| spec.shape == shape)
    }

    /// Check that the tables are complete and free of duplicates.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Inconsistent` naming the first problem found.
    pub fn validate(&self) -> Result<(), GenError> {
        if let Some(shape) = first_duplicate(self.shapes.iter().map(|spec| spec.shape)) {
            return Err(inconsistent(format!("shape {shape} is listed more than once")));
        }
        if let Some(shape) = Shape::ALL.into_iter().find(|&s| self.spec(s).is_none()) {
            return Err(inconsistent(format!("shape {shape} is missing from the shape table")));
        }

        for spec in self.shapes {
            let shape = spec.shape;

            if spec.array_variants.is_empty() {
                return Err(inconsistent(format!("shape {shape} has no array variants")));
            }
            if let Some(variant) = first_duplicate(spec.array_variants.iter().copied()) {
                return Err(inconsistent(format!(
                    "shape {shape} lists array variant {} twice",
                    variant.label()
                )));
            }

            if spec.multisample.is_empty() {
                return Err(inconsistent(format!("shape {shape} has no multisample flags")));
            }
            if let Some(ms) = first_duplicate(spec.multisample.iter().copied()) {
                return Err(inconsistent(format!(
                    "shape {shape} lists multisample flag {} twice",
                    ms.flag()
                )));
            }

            if spec.positional_params.is_empty() {
                return Err(inconsistent(format!("shape {shape} has no positional parameters")));
            }
            if let Some(name) = first_duplicate(spec.positional_params.iter().copied()) {
                return Err(inconsistent(format!(
                    "shape {shape} lists parameter `{name}` twice"
                )));
            }
            if let Some(name) = spec
                .positional_params
                .iter()
                .find(|name| RESERVED_PARAMS.contains(name))
            {
                return Err(inconsistent(format!(
                    "shape {shape} uses reserved parameter name `{name}`"
                )));
            }
        }

        if self.access_modes.is_empty() {
            return Err(inconsistent("no access modes".to_string()));
        }
        if let Some(access) = first_duplicate(self.access_modes.iter().copied()) {
            return Err(inconsistent(format!(
                "access mode {} is listed more than once",
                access.label()
            )));
        }

        if self.element_types.is_empty() {
            return Err(inconsistent("no element types".to_string()));
        }
        if let Some(ty) = first_duplicate(self.element_types.iter().copied()) {
            return Err(inconsistent(format!("element type {ty} is listed more than once")));
        }

        Ok(())
    }
}

fn inconsistent(message: String) -> GenError {
    GenError::Inconsistent(message)
}

fn first_duplicate<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Option<T> {
    let mut seen = Vec::new();
    for item in items {
        if seen.contains(&item) {
            return Some(item);
        }
        seen.push(item);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inconsistent(tables: &DomainTables, needle: &str) {
        match tables.validate() {
            Err(GenError::Inconsistent(message)) => assert!(
                message.contains(needle),
                "expected `{needle}` in `{message}`"
            ),
            other => panic!("expected inconsistency, got {other:?}"),
        }
    }

    #[test]
    fn test_standard_tables_are_consistent() {
        DomainTables::STANDARD.validate().unwrap();
    }

    #[test]
    fn test_only_2d_allows_multisampling() {
        for spec in DomainTables::STANDARD.shapes {
            let has_ms = spec.multisample.contains(&Multisample::Multi);
            assert_eq!(has_ms, spec.shape == Shape::TwoD, "shape {}", spec.shape);
            assert!(spec.multisample.contains(&Multisample::Single));
        }
    }

    #[test]
    fn test_3d_has_no_array_variant() {
        let spec = DomainTables::STANDARD.spec(Shape::ThreeD).unwrap();
        assert_eq!(spec.array_variants, &[ArrayVariant::NonArray]);
        assert_eq!(spec.positional_params, &["width", "height", "depth"]);
    }

    #[test]
    fn test_flags_and_labels() {
        assert_eq!(ArrayVariant::Array.flag(), 1);
        assert_eq!(ArrayVariant::NonArray.label(), "Non-array");
        assert_eq!(Multisample::Multi.flag(), 1);
        assert_eq!(Multisample::Single.label(), "Non-MS");
        assert_eq!(AccessMode::ReadWrite.code(), 1);
        assert_eq!(AccessMode::ReadOnly.label(), "Read-Only");
        assert_eq!(AccessMode::ReadWrite.descriptor_array(), "RWImages");
        assert_eq!(Shape::Cube.to_string(), "Cube");
        assert_eq!(ElementType::Uint.to_string(), "uint");
    }

    #[test]
    fn test_multisampled_images_have_no_mip_levels() {
        assert!(Multisample::Single.has_mip_levels());
        assert!(!Multisample::Multi.has_mip_levels());
    }

    const ONE_D: ShapeSpec = ShapeSpec {
        shape: Shape::OneD,
        array_variants: &[ArrayVariant::NonArray],
        multisample: &[Multisample::Single],
        positional_params: &["width"],
    };

    #[test]
    fn test_missing_shape_is_rejected() {
        const TABLES: DomainTables = DomainTables {
            shapes: &[ONE_D],
            ..DomainTables::STANDARD
        };
        assert_inconsistent(&TABLES, "shape 2D is missing from the shape table");
    }

    #[test]
    fn test_duplicate_shape_is_rejected() {
        const TABLES: DomainTables = DomainTables {
            shapes: &[ONE_D, ONE_D],
            ..DomainTables::STANDARD
        };
        assert_inconsistent(&TABLES, "shape 1D is listed more than once");
    }

    #[test]
    fn test_empty_multisample_list_is_rejected() {
        const TABLES: DomainTables = DomainTables {
            shapes: &[
                ONE_D,
                ShapeSpec {
                    shape: Shape::TwoD,
                    array_variants: &[ArrayVariant::NonArray],
                    multisample: &[],
                    positional_params: &["width", "height"],
                },
                ShapeSpec {
                    shape: Shape::ThreeD,
                    positional_params: &["width", "height", "depth"],
                    ..ONE_D
                },
                ShapeSpec {
                    shape: Shape::Cube,
                    ..ONE_D
                },
            ],
            ..DomainTables::STANDARD
        };
        assert_inconsistent(&TABLES, "shape 2D has no multisample flags");
    }

    #[test]
    fn test_reserved_parameter_name_is_rejected() {
        const TABLES: DomainTables = DomainTables {
            shapes: &[
                ShapeSpec {
                    positional_params: &["width", "elements"],
                    ..ONE_D
                },
                ShapeSpec {
                    shape: Shape::TwoD,
                    ..ONE_D
                },
                ShapeSpec {
                    shape: Shape::ThreeD,
                    ..ONE_D
                },
                ShapeSpec {
                    shape: Shape::Cube,
                    ..ONE_D
                },
            ],
            ..DomainTables::STANDARD
        };
        assert_inconsistent(&TABLES, "reserved parameter name `elements`");
    }

    #[test]
    fn test_duplicate_element_type_is_rejected() {
        const TABLES: DomainTables = DomainTables {
            element_types: &[ElementType::Float, ElementType::Float],
            ..DomainTables::STANDARD
        };
        assert_inconsistent(&TABLES, "element type float is listed more than once");
    }

    #[test]
    fn test_empty_access_modes_are_rejected() {
        const TABLES: DomainTables = DomainTables {
            access_modes: &[],
            ..DomainTables::STANDARD
        };
        assert_inconsistent(&TABLES, "no access modes");
    }
}
