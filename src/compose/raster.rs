//! Rasterizer: write a finalized region tree into one RGBA pixel buffer.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::annotate;
use crate::layout::{LayoutError, RegionTree};

/// Default overall output width in pixels.
pub const DEFAULT_TARGET_WIDTH: u32 = 1200;

/// How far the tree's minimum corner may sit from the origin before
/// rasterization refuses it.
const ORIGIN_TOLERANCE: f64 = 1e-6;

/// Canvas fill behind the panels.
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterization parameters.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Overall output width in pixels; the tree is rescaled to match.
    pub target_width: u32,
    /// Resampling filter for panel content (cubic by default).
    pub filter: FilterType,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { target_width: DEFAULT_TARGET_WIDTH, filter: FilterType::CatmullRom }
    }
}

/// Rasterize a finalized tree into an RGBA buffer.
///
/// The tree must already be anchored at the origin (see
/// [`RegionTree::normalize`]). It is rescaled to the target width, every
/// region's geometry is rounded half-up onto the integer pixel grid, and
/// each region's content is resized to exactly its rounded size and
/// written depth-first into the buffer. Valid layouts never overlap, so
/// overlap is not checked at write time.
///
/// The tree is consumed: a render is a one-shot computation.
///
/// # Errors
/// [`LayoutError::Origin`] if the tree's bounding box does not start at
/// the origin.
pub fn rasterize(mut tree: RegionTree, options: RasterOptions) -> Result<RgbaImage, LayoutError> {
    let (x_min, y_min) = (tree.x_min(), tree.y_min());
    if x_min.abs() > ORIGIN_TOLERANCE || y_min.abs() > ORIGIN_TOLERANCE {
        return Err(LayoutError::Origin { x_min, y_min });
    }

    tree.rescale(f64::from(options.target_width) / tree.width_range());

    let canvas_width = round_half_up(tree.width_range()).max(1);
    let canvas_height = round_half_up(tree.height_range()).max(1);
    log::debug!(
        "rasterizing {} panels onto a {canvas_width}x{canvas_height} canvas",
        tree.leaf_count()
    );
    let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, BACKGROUND);

    for region in tree.leaves() {
        let x = round_half_up(region.x_min());
        let y = round_half_up(region.y_min());
        let width = round_half_up(region.width()).max(1);
        let height = round_half_up(region.height()).max(1);

        let mut panel = region.content().to_sized(width, height, options.filter);
        if let Some(label) = region.label() {
            annotate::draw_label(&mut panel, label);
        }
        imageops::replace(&mut canvas, &panel, i64::from(x), i64::from(y));
    }

    Ok(canvas)
}

/// Round to the nearest integer, halves up. Negative float noise clamps
/// to zero.
fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{merge_row, Region};
    use crate::panel::PanelContent;

    fn solid_region(size: f64, rgb: [u8; 3]) -> Region {
        let px = size.round() as u32;
        let pixels = RgbaImage::from_pixel(px, px, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        let content = PanelContent::raster(pixels, format!("/figs/{}-{}-{}.png", rgb[0], rgb[1], rgb[2]));
        Region::new(size, size, content, None).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.6), 3);
        assert_eq!(round_half_up(-0.000_001), 0);
    }

    #[test]
    fn test_blank_row_dimensions() {
        let row = merge_row([
            Region::blank(50.0, 50.0).unwrap(),
            Region::blank(50.0, 50.0).unwrap(),
            Region::blank(50.0, 50.0).unwrap(),
        ])
        .unwrap();

        let options = RasterOptions { target_width: 150, ..RasterOptions::default() };
        let canvas = rasterize(row, options).unwrap();
        assert_eq!(canvas.dimensions(), (150, 50));
        assert_eq!(canvas.get_pixel(75, 25), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_panels_land_in_their_subrects() {
        let red = [200, 20, 20];
        let green = [20, 200, 20];
        let blue = [20, 20, 200];
        let row = merge_row([
            solid_region(50.0, red),
            solid_region(50.0, green),
            solid_region(50.0, blue),
        ])
        .unwrap();

        // Doubling to 300 wide puts panel centres at x = 50, 150, 250.
        let options = RasterOptions { target_width: 300, ..RasterOptions::default() };
        let canvas = rasterize(row, options).unwrap();
        assert_eq!(canvas.dimensions(), (300, 100));
        assert_eq!(canvas.get_pixel(50, 50), &Rgba([red[0], red[1], red[2], 255]));
        assert_eq!(canvas.get_pixel(150, 50), &Rgba([green[0], green[1], green[2], 255]));
        assert_eq!(canvas.get_pixel(250, 50), &Rgba([blue[0], blue[1], blue[2], 255]));
    }

    #[test]
    fn test_fractional_geometry_rounds_onto_grid() {
        let row = merge_row([
            Region::blank(50.0, 50.0).unwrap(),
            Region::blank(50.0, 50.0).unwrap(),
            Region::blank(50.0, 50.0).unwrap(),
        ])
        .unwrap();

        // 100/150 leaves every panel at a fractional 33.3 width.
        let options = RasterOptions { target_width: 100, ..RasterOptions::default() };
        let canvas = rasterize(row, options).unwrap();
        assert_eq!(canvas.dimensions(), (100, 33));
    }

    #[test]
    fn test_unnormalized_tree_rejected() {
        let mut row = merge_row([
            Region::blank(50.0, 50.0).unwrap(),
            Region::blank(50.0, 50.0).unwrap(),
        ])
        .unwrap();
        row.translate(5.0, 0.0);

        let err = rasterize(row, RasterOptions::default()).unwrap_err();
        assert!(matches!(err, LayoutError::Origin { .. }));
    }

    #[test]
    fn test_labels_are_burned_in() {
        let content = PanelContent::blank(50, 50);
        let label = crate::annotate::Label::new("a.").at(0.1, 0.1).unwrap().with_size(21);
        let region = Region::new(50.0, 50.0, content, Some(label)).unwrap();
        let tree = RegionTree::from(region);

        let options = RasterOptions { target_width: 200, ..RasterOptions::default() };
        let canvas = rasterize(tree, options).unwrap();
        let marked = canvas.pixels().any(|p| *p == Rgba([0, 0, 0, 255]));
        assert!(marked);
    }
}
