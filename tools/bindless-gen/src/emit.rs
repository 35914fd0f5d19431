//! Slang text templates
//!
//! Every function here renders fragments only. Fragments become lines once
//! the document is joined, so none of them carry their own line terminator
//! except the file header and block closers, which add the blank separator
//! line.

use crate::domain::ElementType;
use crate::params::{Direction, Overload};
use crate::traversal::Combination;

pub const FILE_HEADER: &str = "// Generated boilerplate code for _Image.get_dimensions method.\n";
pub const MODULE_DECL: &str = "implementing bindless;\n";
pub const BLOCK_CLOSE: &str = "}\n";

const GENERIC_PARAMS: &str = "__generic<T:ITexelElement, let sampleCount:int, let format:int>";

/// `// Shape 2D, Read-Only, Array, Non-MS`
pub fn block_comment(combination: &Combination) -> String {
    format!(
        "// Shape {}, {}, {}, {}",
        combination.shape(),
        combination.access.label(),
        combination.array.label(),
        combination.multisample.label()
    )
}

/// Generic parameter list and extension opener tying the block's methods to
/// one `_Image` instantiation.
pub fn block_header(combination: &Combination) -> [String; 2] {
    [
        GENERIC_PARAMS.to_string(),
        format!(
            "public extension _Image<T, __Shape{}, {}, {}, sampleCount, {}, format> {{",
            combination.shape(),
            combination.array.flag(),
            combination.multisample.flag(),
            combination.access.code()
        ),
    ]
}

/// One method forwarding to the image's `GetDimensions` intrinsic.
///
/// Outputs take the element type; the only input is the mip level.
pub fn method(overload: &Overload, element: ElementType) -> [String; 4] {
    let declared = overload
        .params
        .iter()
        .map(|param| match param.direction {
            Direction::In => format!("uint {}", param.name),
            Direction::Out => format!("out {} {}", element, param.name),
        })
        .collect::<Vec<_>>()
        .join(", ");
    let forwarded = overload.argument_names().collect::<Vec<_>>().join(", ");

    [
        format!("    public void get_dimensions({declared}) {{"),
        "        ImageType image = get();".to_string(),
        format!("        image.GetDimensions({forwarded});"),
        "    }".to_string(),
    ]
}
