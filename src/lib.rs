//! # Panelpress
//!
//! A layout-driven raster compositor for camera-ready multi-panel figures.
//!
//! Panelpress assembles independent images into one output figure from a
//! nested row/column description. The heart of the crate is a recursive
//! geometric layout engine: stacking appends a subtree to a receiving
//! edge and rescales it so the extents match exactly, through arbitrarily
//! deep nesting.
//!
//! ## Core Concepts
//!
//! - **Region / RegionTree**: a positioned image rectangle, and an ordered
//!   composite of them sharing one bounding box
//! - **Stacking algebra**: `stack_right`/`stack_below` consume their
//!   operand and rescale it to fit; `merge_row`/`merge_col` reduce lists
//! - **Self-similar rescale**: scaling anchors at each subtree's own
//!   minimum corner, preserving relative layout at every nesting depth
//! - **Rasterization**: geometry is rounded onto the pixel grid and each
//!   panel is resized into its sub-rectangle of one RGBA buffer
//!
//! ## Example
//!
//! ```rust
//! use panelpress::{merge_row, rasterize, RasterOptions, Region};
//!
//! let row = merge_row([
//!     Region::blank(50.0, 50.0).unwrap(),
//!     Region::blank(50.0, 50.0).unwrap(),
//!     Region::blank(50.0, 50.0).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(row.width_range(), 150.0);
//!
//! let options = RasterOptions { target_width: 300, ..RasterOptions::default() };
//! let canvas = rasterize(row, options).unwrap();
//! assert_eq!(canvas.dimensions(), (300, 100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod annotate;
pub mod arrange;
pub mod compose;
pub mod config;
pub mod layout;
pub mod panel;

// Re-exports for convenience
pub use annotate::{Label, LabelSequence};
pub use compose::{rasterize, sketch_svg, write_sketch, RasterOptions, SketchOptions, TreeBuilder};
pub use config::{parse_file, parse_str, BranchSpec, SpecNode};
pub use layout::{merge_col, merge_row, LayoutError, Node, Region, RegionTree};
pub use panel::{PanelContent, PanelLoader};
