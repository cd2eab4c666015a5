//! Panel module: the image side of the compositor.
//!
//! This module contains:
//! - [`PanelContent`]: decoded pixels or a blank placeholder
//! - [`PanelLoader`]: disk decoding with placeholder fallback
//! - [`metadata`]: PNG resolution and comment extraction

mod content;
mod loader;
pub mod metadata;

pub use content::PanelContent;
pub use loader::{LoadError, PanelLoader, DEFAULT_PLACEHOLDER_SIZE};
