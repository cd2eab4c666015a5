//! Sketch renderer: outline previews of a layout, without pixel content.
//!
//! Draws every region of a tree as an unfilled rectangle onto an SVG
//! canvas, with optional index or file-stem labels. Same traversal
//! contract as the rasterizer, but none of the resize or annotation paths
//! are touched — a dry run over a layout is effectively free.

use std::io;
use std::path::Path;

use crate::layout::{Region, RegionTree};

/// Fraction of the bounding box added as padding on every side.
const PAD: f64 = 0.1;

/// What to write at the centre of each sketched rectangle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SketchLabel {
    /// No labels.
    None,
    /// The region's depth-first index.
    Index,
    /// The source file stem, falling back to the index for placeholders.
    #[default]
    Stem,
}

/// Sketch parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct SketchOptions {
    /// Per-rectangle label mode.
    pub label: SketchLabel,
}

/// Render the tree's rectangles as an SVG outline document.
pub fn sketch_svg(tree: &RegionTree, options: SketchOptions) -> String {
    let x_range = tree.width_range();
    let y_range = tree.height_range();
    let (pad_x, pad_y) = (PAD * x_range, PAD * y_range);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        tree.x_min() - pad_x,
        tree.y_min() - pad_y,
        x_range + 2.0 * pad_x,
        y_range + 2.0 * pad_y,
    ));

    let stroke = 0.004 * x_range;
    for (index, region) in tree.leaves().enumerate() {
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             fill=\"lightgrey\" fill-opacity=\"0.6\" stroke=\"black\" stroke-width=\"{stroke}\"/>\n",
            region.x_min(),
            region.y_min(),
            region.width(),
            region.height(),
        ));
        if let Some(text) = label_text(region, index, options.label) {
            let font_size = 0.25 * region.width().min(region.height());
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-size=\"{font_size}\" \
                 text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n",
                region.x_min() + region.width() / 2.0,
                region.y_min() + region.height() / 2.0,
                escape(&text),
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the outline sketch to a file.
///
/// # Errors
/// Propagates the underlying I/O error.
pub fn write_sketch(tree: &RegionTree, path: &Path, options: SketchOptions) -> io::Result<()> {
    std::fs::write(path, sketch_svg(tree, options))
}

fn label_text(region: &Region, index: usize, mode: SketchLabel) -> Option<String> {
    match mode {
        SketchLabel::None => None,
        SketchLabel::Index => Some(index.to_string()),
        SketchLabel::Stem => Some(
            region
                .content()
                .path()
                .and_then(Path::file_stem)
                .map_or_else(|| index.to_string(), |stem| stem.to_string_lossy().into_owned()),
        ),
    }
}

/// Minimal XML text escaping.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
