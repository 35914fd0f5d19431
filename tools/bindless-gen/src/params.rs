//! Formal parameter lists for the `get_dimensions` overloads

use smallvec::SmallVec;

use crate::domain::{ArrayVariant, Multisample, ShapeSpec};
use crate::traversal::Combination;

/// Layer count, appended for array images
pub const ELEMENTS_PARAM: &str = "elements";
/// Sample count, appended for multisampled images
pub const SAMPLE_COUNT_PARAM: &str = "sampleCount";
/// Mip level to query, the leading input of the mip-level overload
pub const MIP_LEVEL_PARAM: &str = "mipLevel";
/// Number of mip levels, the trailing output of the mip-level overload
pub const LEVEL_COUNT_PARAM: &str = "numberOfLevels";

/// Names the builder appends itself; shapes may not use them as dimensions
pub const RESERVED_PARAMS: [&str; 4] = [
    ELEMENTS_PARAM,
    SAMPLE_COUNT_PARAM,
    MIP_LEVEL_PARAM,
    LEVEL_COUNT_PARAM,
];

/// Longest list: mip level + three dimensions + level count
pub type ParamList = SmallVec<[Parameter; 6]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub direction: Direction,
}

impl Parameter {
    pub fn input(name: &'static str) -> Self {
        Self {
            name,
            direction: Direction::In,
        }
    }

    pub fn output(name: &'static str) -> Self {
        Self {
            name,
            direction: Direction::Out,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverloadKind {
    /// `get_dimensions(out ...)`
    Dimensions,
    /// `get_dimensions(uint mipLevel, out ..., out numberOfLevels)`
    DimensionsAtMipLevel,
}

/// One method signature for a combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload {
    pub kind: OverloadKind,
    pub params: ParamList,
}

impl Overload {
    /// Parameter names in call order, as forwarded to `GetDimensions`
    pub fn argument_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|param| param.name)
    }
}

/// Dimension names reported for a shape: its positional dimensions, then the
/// layer count for arrays, then the sample count for multisampled images.
pub fn base_params(
    spec: &ShapeSpec,
    array: ArrayVariant,
    multisample: Multisample,
) -> SmallVec<[&'static str; 4]> {
    let mut names: SmallVec<[&'static str; 4]> = spec.positional_params.iter().copied().collect();
    if array.is_array() {
        names.push(ELEMENTS_PARAM);
    }
    if multisample.is_multisampled() {
        names.push(SAMPLE_COUNT_PARAM);
    }
    names
}

/// Build every overload emitted for a combination, plain query first.
///
/// The mip-level overload only exists when [`Multisample::has_mip_levels`]
/// holds for the combination.
pub fn overloads(combination: &Combination) -> SmallVec<[Overload; 2]> {
    let base = base_params(combination.spec, combination.array, combination.multisample);

    let mut overloads = SmallVec::new();
    overloads.push(Overload {
        kind: OverloadKind::Dimensions,
        params: base.iter().copied().map(Parameter::output).collect(),
    });

    if combination.multisample.has_mip_levels() {
        let mut params = ParamList::new();
        params.push(Parameter::input(MIP_LEVEL_PARAM));
        params.extend(base.iter().copied().map(Parameter::output));
        params.push(Parameter::output(LEVEL_COUNT_PARAM));
        overloads.push(Overload {
            kind: OverloadKind::DimensionsAtMipLevel,
            params,
        });
    }

    overloads
}
