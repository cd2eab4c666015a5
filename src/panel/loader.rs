//! Disk decoding with placeholder fallback for missing panels.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::content::PanelContent;

/// Default edge length for placeholder panels, in pixels.
pub const DEFAULT_PLACEHOLDER_SIZE: u32 = 500;

/// Error raised when a panel image cannot be resolved.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path could not be decoded and placeholder substitution was
    /// disabled.
    #[error("unable to load panel image {path}: {source}")]
    MissingImage {
        /// Path that failed to resolve.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },
}

/// Decodes panel images from disk.
///
/// A path that fails to decode is substituted with a blank placeholder of
/// the configured default size — a missing panel should not sink a whole
/// figure. Strict mode turns the substitution off and makes the failure
/// fatal.
#[derive(Clone, Debug)]
pub struct PanelLoader {
    placeholder_size: (u32, u32),
    strict: bool,
}

impl Default for PanelLoader {
    fn default() -> Self {
        Self {
            placeholder_size: (DEFAULT_PLACEHOLDER_SIZE, DEFAULT_PLACEHOLDER_SIZE),
            strict: false,
        }
    }
}

impl PanelLoader {
    /// Create a loader with default placeholder size and substitution on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size used for placeholder panels.
    #[must_use]
    pub const fn with_placeholder_size(mut self, width: u32, height: u32) -> Self {
        self.placeholder_size = (width, height);
        self
    }

    /// Disable or enable placeholder substitution for missing images.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Decode the image at `path`.
    ///
    /// # Errors
    /// [`LoadError::MissingImage`] if decoding fails in strict mode; in the
    /// default mode the failure is logged and a blank placeholder returned.
    pub fn load(&self, path: &Path) -> Result<PanelContent, LoadError> {
        match image::open(path) {
            Ok(decoded) => {
                let pixels = decoded.to_rgba8();
                log::debug!(
                    "loaded panel {} ({}x{})",
                    path.display(),
                    pixels.width(),
                    pixels.height()
                );
                Ok(PanelContent::raster(pixels, path))
            }
            Err(source) if self.strict => {
                Err(LoadError::MissingImage { path: path.to_path_buf(), source })
            }
            Err(source) => {
                let (width, height) = self.placeholder_size;
                log::warn!(
                    "substituting {width}x{height} blank for {}: {source}",
                    path.display()
                );
                Ok(PanelContent::blank(width, height))
            }
        }
    }
}
