//! PNG metadata: resolution and user comments.
//!
//! Reads the pHYs chunk (physical pixel dimensions) and tEXt `Comment`
//! entries without decoding any pixel data.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Inches per meter, for converting pHYs dots-per-meter to DPI.
const INCHES_PER_METER: f64 = 39.3701;

/// Metadata extracted from a PNG file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelMetadata {
    /// The file the metadata was read from.
    pub path: PathBuf,
    /// Resolution in dots per inch, if the file records one.
    pub dpi: Option<u32>,
    /// All `Comment` text chunks, in file order.
    pub comments: Vec<String>,
}

/// Error raised while reading PNG metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The file could not be opened.
    #[error("unable to open {0}")]
    Io(#[from] std::io::Error),
    /// The PNG stream was malformed.
    #[error("unable to parse png metadata: {0}")]
    Decode(#[from] png::DecodingError),
}

/// Read DPI and comment metadata from a PNG file.
///
/// # Errors
/// [`MetadataError`] if the file cannot be opened or is not a valid PNG.
pub fn read_png_metadata(path: &Path) -> Result<PanelMetadata, MetadataError> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let reader = decoder.read_info()?;
    let info = reader.info();

    let dpi = info.pixel_dims.and_then(|dims| match dims.unit {
        png::Unit::Meter => Some((f64::from(dims.xppu) / INCHES_PER_METER + 0.5) as u32),
        png::Unit::Unspecified => None,
    });

    let comments = info
        .uncompressed_latin1_text
        .iter()
        .filter(|chunk| chunk.keyword == "Comment")
        .map(|chunk| chunk.text.clone())
        .collect();

    Ok(PanelMetadata { path: path.to_path_buf(), dpi, comments })
}
