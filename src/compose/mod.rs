//! Compose module: from figure description to output image.
//!
//! This module contains:
//! - [`TreeBuilder`]: resolves the parsed description into a positioned
//!   [`RegionTree`](crate::RegionTree)
//! - [`rasterize`]: writes a finalized tree into one RGBA buffer
//! - [`sketch_svg`] / [`write_sketch`]: outline previews for dry runs

mod builder;
mod raster;
mod sketch;

pub use builder::{BuildError, TreeBuilder, DEFAULT_STACK_TARGET};
pub use raster::{rasterize, RasterOptions, DEFAULT_TARGET_WIDTH};
pub use sketch::{sketch_svg, write_sketch, SketchLabel, SketchOptions};
