//! Region: a positioned rectangle referencing one panel of image content.

use crate::annotate::Label;
use crate::panel::PanelContent;

use super::error::LayoutError;

/// A single positioned image rectangle — the leaf of a layout tree.
///
/// Geometry is tracked in floating-point figure coordinates. The position
/// and size mutate during layout (shift, rescale, stacking); the referenced
/// content and topology never change after construction.
#[derive(Clone, Debug)]
pub struct Region {
    /// X coordinate of the top-left corner.
    x: f64,
    /// Y coordinate of the top-left corner.
    y: f64,
    /// Width in figure coordinates. Always positive.
    width: f64,
    /// Height in figure coordinates. Always positive.
    height: f64,
    /// The image content this region places.
    content: PanelContent,
    /// Optional annotation burned in at rasterization time.
    label: Option<Label>,
}

impl Region {
    /// Create a region at the origin with the given size.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidShape`] if either dimension is not
    /// positive and finite.
    pub fn new(
        width: f64,
        height: f64,
        content: PanelContent,
        label: Option<Label>,
    ) -> Result<Self, LayoutError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(LayoutError::InvalidShape { width, height });
        }
        Ok(Self { x: 0.0, y: 0.0, width, height, content, label })
    }

    /// Create a region sized to its content's native dimensions.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidShape`] if the content reports a zero
    /// dimension.
    pub fn from_content(content: PanelContent, label: Option<Label>) -> Result<Self, LayoutError> {
        let width = f64::from(content.width());
        let height = f64::from(content.height());
        Self::new(width, height, content, label)
    }

    /// Create an unlabelled region over a blank placeholder panel.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidShape`] if either dimension is not
    /// positive and finite.
    pub fn blank(width: f64, height: f64) -> Result<Self, LayoutError> {
        let content = PanelContent::blank(width.round() as u32, height.round() as u32);
        Self::new(width, height, content, None)
    }

    /// Smallest x coordinate (the left edge).
    #[inline]
    pub const fn x_min(&self) -> f64 {
        self.x
    }

    /// Largest x coordinate (the right edge).
    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Smallest y coordinate (the top edge).
    #[inline]
    pub const fn y_min(&self) -> f64 {
        self.y
    }

    /// Largest y coordinate (the bottom edge).
    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Current width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Current height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The image content placed in this region.
    #[inline]
    pub const fn content(&self) -> &PanelContent {
        &self.content
    }

    /// The annotation attached to this region, if any.
    #[inline]
    pub const fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Move the region right by the given amount.
    #[inline]
    pub fn shift_x(&mut self, dx: f64) {
        self.x += dx;
    }

    /// Move the region down by the given amount.
    #[inline]
    pub fn shift_y(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Scale the region's size by a factor, leaving its position fixed.
    ///
    /// A leaf's own minimum corner is its position, so the self-similar
    /// rescale rule degenerates to a pure size change here; enclosing trees
    /// reposition their children.
    ///
    /// # Panics
    /// Panics if `factor` is not finite and positive — a contract violation
    /// of the composition algebra.
    pub fn rescale(&mut self, factor: f64) {
        assert!(
            factor.is_finite() && factor > 0.0,
            "rescale factor must be finite and positive (got {factor})"
        );
        self.width *= factor;
        self.height *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_new() {
        let region = Region::blank(50.0, 30.0).unwrap();
        assert_eq!(region.x_min(), 0.0);
        assert_eq!(region.y_min(), 0.0);
        assert_eq!(region.x_max(), 50.0);
        assert_eq!(region.y_max(), 30.0);
    }

    #[test]
    fn test_region_rejects_non_positive() {
        assert!(matches!(
            Region::blank(0.0, 30.0),
            Err(LayoutError::InvalidShape { .. })
        ));
        assert!(matches!(
            Region::blank(50.0, -1.0),
            Err(LayoutError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_region_shift() {
        let mut region = Region::blank(50.0, 50.0).unwrap();
        region.shift_x(25.0);
        region.shift_x(25.0);
        region.shift_y(-10.0);
        assert_eq!(region.x_min(), 50.0);
        assert_eq!(region.y_min(), -10.0);
        assert_eq!(region.width(), 50.0);
    }

    #[test]
    fn test_region_rescale_keeps_position() {
        let mut region = Region::blank(50.0, 20.0).unwrap();
        region.shift_x(30.0);
        region.rescale(0.5);
        assert_eq!(region.x_min(), 30.0);
        assert_eq!(region.width(), 25.0);
        assert_eq!(region.height(), 10.0);
    }

    #[test]
    #[should_panic(expected = "rescale factor")]
    fn test_region_rescale_rejects_zero() {
        let mut region = Region::blank(50.0, 50.0).unwrap();
        region.rescale(0.0);
    }

    #[test]
    fn test_region_positive_after_shift_rescale_sequence() {
        let mut region = Region::blank(50.0, 50.0).unwrap();
        for _ in 0..20 {
            region.shift_x(-13.0);
            region.shift_y(7.0);
            region.rescale(0.5);
            region.rescale(1.9);
        }
        assert!(region.width() > 0.0);
        assert!(region.height() > 0.0);
    }
}
