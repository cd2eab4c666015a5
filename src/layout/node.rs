//! Node: the sum type over leaves and composites.
//!
//! Every layout operation is defined uniformly on a node, whether it is a
//! single [`Region`] or a nested [`RegionTree`]. Dispatch is by variant;
//! there is no inheritance emulation.

use super::error::{Axis, LayoutError};
use super::region::Region;
use super::tree::RegionTree;

/// A layout node: either a leaf region or a nested tree.
#[derive(Clone, Debug)]
pub enum Node {
    /// A single positioned image rectangle.
    Region(Region),
    /// An ordered composite sharing one bounding box.
    Tree(RegionTree),
}

impl Node {
    /// Smallest x coordinate over all contained regions.
    pub fn x_min(&self) -> f64 {
        match self {
            Self::Region(r) => r.x_min(),
            Self::Tree(t) => t.x_min(),
        }
    }

    /// Largest x coordinate over all contained regions.
    pub fn x_max(&self) -> f64 {
        match self {
            Self::Region(r) => r.x_max(),
            Self::Tree(t) => t.x_max(),
        }
    }

    /// Smallest y coordinate over all contained regions.
    pub fn y_min(&self) -> f64 {
        match self {
            Self::Region(r) => r.y_min(),
            Self::Tree(t) => t.y_min(),
        }
    }

    /// Largest y coordinate over all contained regions.
    pub fn y_max(&self) -> f64 {
        match self {
            Self::Region(r) => r.y_max(),
            Self::Tree(t) => t.y_max(),
        }
    }

    /// Horizontal extent of the bounding box.
    #[inline]
    pub fn width_range(&self) -> f64 {
        self.x_max() - self.x_min()
    }

    /// Vertical extent of the bounding box.
    #[inline]
    pub fn height_range(&self) -> f64 {
        self.y_max() - self.y_min()
    }

    /// Number of regions transitively contained.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Region(_) => 1,
            Self::Tree(t) => t.leaf_count(),
        }
    }

    /// Move every contained region right by the given amount.
    pub fn shift_x(&mut self, dx: f64) {
        match self {
            Self::Region(r) => r.shift_x(dx),
            Self::Tree(t) => t.shift_x(dx),
        }
    }

    /// Move every contained region down by the given amount.
    pub fn shift_y(&mut self, dy: f64) {
        match self {
            Self::Region(r) => r.shift_y(dy),
            Self::Tree(t) => t.shift_y(dy),
        }
    }

    /// Scale the node uniformly about its own minimum coordinate.
    ///
    /// See [`RegionTree::rescale`] for the self-similar rule applied to
    /// nested trees.
    ///
    /// # Panics
    /// Panics if `factor` is not finite and positive.
    pub fn rescale(&mut self, factor: f64) {
        match self {
            Self::Region(r) => r.rescale(factor),
            Self::Tree(t) => t.rescale(factor),
        }
    }

    /// Append `other` to the right of `self`, consuming both.
    ///
    /// The offset placing `other` flush against `self`'s right edge is
    /// computed from unscaled coordinates; `other` is then shifted and
    /// rescaled so its vertical extent matches `self`'s exactly. A tree
    /// operand merged into a tree receiver is spliced at the tail of the
    /// children list, preserving depth-first traversal order; a tree
    /// appended to a leaf stays nested.
    ///
    /// # Errors
    /// [`LayoutError::DegenerateExtent`] if `other.height_range()` is not
    /// positive.
    pub fn stack_right(self, other: impl Into<Self>) -> Result<RegionTree, LayoutError> {
        let mut other = other.into();
        let extent = other.height_range();
        if extent <= 0.0 {
            return Err(LayoutError::DegenerateExtent { axis: Axis::Y });
        }
        let x_offset = self.x_max() - other.x_min();
        let scale = self.height_range() / extent;
        other.shift_x(x_offset);
        other.rescale(scale);
        Ok(Self::absorb(self, other))
    }

    /// Append `other` below `self`, consuming both.
    ///
    /// Symmetric to [`Node::stack_right`]: matches horizontal extents and
    /// stacks vertically.
    ///
    /// # Errors
    /// [`LayoutError::DegenerateExtent`] if `other.width_range()` is not
    /// positive.
    pub fn stack_below(self, other: impl Into<Self>) -> Result<RegionTree, LayoutError> {
        let mut other = other.into();
        let extent = other.width_range();
        if extent <= 0.0 {
            return Err(LayoutError::DegenerateExtent { axis: Axis::X });
        }
        let y_offset = self.y_max() - other.y_min();
        let scale = self.width_range() / extent;
        other.shift_y(y_offset);
        other.rescale(scale);
        Ok(Self::absorb(self, other))
    }

    /// Merge an already positioned operand into the receiver.
    fn absorb(receiver: Self, operand: Self) -> RegionTree {
        match receiver {
            // A leaf receiver starts a new composite; a tree operand stays
            // nested so its internal layout keeps a local anchor.
            Self::Region(r) => RegionTree::from_children(vec![Self::Region(r), operand]),
            Self::Tree(mut t) => {
                match operand {
                    Self::Region(r) => t.push_child(Self::Region(r)),
                    Self::Tree(o) => t.splice_children(o),
                }
                t
            }
        }
    }
}

impl From<Region> for Node {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl From<RegionTree> for Node {
    fn from(tree: RegionTree) -> Self {
        Self::Tree(tree)
    }
}
