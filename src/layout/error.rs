//! Error taxonomy for the layout engine.

use thiserror::Error;

/// Axis along which a stacking ratio is computed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    /// Horizontal extent (`width_range`).
    X,
    /// Vertical extent (`height_range`).
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors raised by layout construction and composition.
///
/// Geometry errors are contract violations of the composition algebra and
/// abort the affected composition; they are propagated, never recovered.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A stacking operand has zero extent along the axis used for the
    /// scale ratio (e.g. `height_range == 0` in `stack_right`).
    #[error("stacking operand has zero extent along the {axis} axis")]
    DegenerateExtent {
        /// Axis whose range was degenerate.
        axis: Axis,
    },

    /// A region tree was constructed with no children.
    #[error("a region tree must contain at least one child")]
    EmptyTree,

    /// Rasterization was requested on a tree whose bounding box does not
    /// start at the origin. The caller must normalize first.
    #[error("tree is not anchored at the origin (x_min = {x_min}, y_min = {y_min}); normalize before rasterizing")]
    Origin {
        /// Smallest x coordinate found in the tree.
        x_min: f64,
        /// Smallest y coordinate found in the tree.
        y_min: f64,
    },

    /// A region was constructed with a non-positive width or height.
    #[error("region dimensions must be positive (got {width} x {height})")]
    InvalidShape {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
}
