//! Panel content: decoded pixels or a blank placeholder.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// White, fully opaque — the fill used for placeholder panels.
const BLANK_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The image content a [`Region`](crate::Region) places.
///
/// Decoded pixels keep the source path for diagnostics and sketch labels.
/// A blank placeholder stands in for images that could not be loaded; its
/// pixels are synthesized on demand, so resizing it costs nothing.
#[derive(Clone, Debug)]
pub enum PanelContent {
    /// Decoded raster data from disk.
    Raster {
        /// Decoded RGBA pixels at native size.
        pixels: RgbaImage,
        /// Source path the pixels were decoded from.
        path: PathBuf,
    },
    /// A solid placeholder for a missing image.
    Blank {
        /// Placeholder width in pixels.
        width: u32,
        /// Placeholder height in pixels.
        height: u32,
    },
}

impl PanelContent {
    /// Wrap decoded pixels together with their source path.
    pub fn raster(pixels: RgbaImage, path: impl Into<PathBuf>) -> Self {
        Self::Raster { pixels, path: path.into() }
    }

    /// Create a blank placeholder of the given pixel size.
    pub const fn blank(width: u32, height: u32) -> Self {
        Self::Blank { width, height }
    }

    /// Native width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Raster { pixels, .. } => pixels.width(),
            Self::Blank { width, .. } => *width,
        }
    }

    /// Native height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Self::Raster { pixels, .. } => pixels.height(),
            Self::Blank { height, .. } => *height,
        }
    }

    /// Source path, if this content was decoded from disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Raster { path, .. } => Some(path),
            Self::Blank { .. } => None,
        }
    }

    /// Whether this panel is a placeholder.
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank { .. })
    }

    /// Produce pixels at exactly the given size.
    ///
    /// Raster content is resampled with `filter`; the native pixels are
    /// untouched. Blank content is synthesized directly at the target size.
    pub fn to_sized(&self, width: u32, height: u32, filter: FilterType) -> RgbaImage {
        match self {
            Self::Raster { pixels, .. } => {
                if pixels.width() == width && pixels.height() == height {
                    pixels.clone()
                } else {
                    imageops::resize(pixels, width, height, filter)
                }
            }
            Self::Blank { .. } => RgbaImage::from_pixel(width, height, BLANK_PIXEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_dimensions() {
        let content = PanelContent::blank(500, 300);
        assert_eq!(content.width(), 500);
        assert_eq!(content.height(), 300);
        assert!(content.is_blank());
        assert!(content.path().is_none());
    }

    #[test]
    fn test_blank_to_sized_is_white() {
        let content = PanelContent::blank(500, 300);
        let pixels = content.to_sized(10, 20, FilterType::CatmullRom);
        assert_eq!(pixels.dimensions(), (10, 20));
        assert_eq!(pixels.get_pixel(5, 10), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_raster_to_sized_resamples() {
        let red = Rgba([200, 10, 10, 255]);
        let native = RgbaImage::from_pixel(8, 8, red);
        let content = PanelContent::raster(native, "/tmp/red.png");

        // A constant image stays constant under resampling.
        let resized = content.to_sized(20, 12, FilterType::CatmullRom);
        assert_eq!(resized.dimensions(), (20, 12));
        assert_eq!(resized.get_pixel(10, 6), &red);

        // Native dimensions are preserved on the content itself.
        assert_eq!(content.width(), 8);
        assert_eq!(content.height(), 8);
    }
}
