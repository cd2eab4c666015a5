//! Arrange: fit fixed-size slots into rows of a fixed figure width.
//!
//! A deliberately simple, non-recursive companion to the layout engine:
//! slots are taken in order and packed left to right, opening a new row
//! whenever the next slot no longer fits. No reordering, no best-fit
//! heuristics.

use thiserror::Error;

/// A rectangular slot to be arranged.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    /// Slot width in figure units.
    pub width: f64,
    /// Slot height in figure units.
    pub height: f64,
    /// Optional display label.
    pub label: Option<String>,
}

impl Slot {
    /// Create an unlabelled slot.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, label: None }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Width-to-height ratio.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// A slot placed into the arrangement grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// The arranged slot.
    pub slot: Slot,
    /// Horizontal span within the row: `(start, end)`.
    pub span: (f64, f64),
    /// Grid position as `(column, row)`.
    pub grid: (usize, usize),
}

/// Error raised when the slots cannot fit the figure width.
#[derive(Debug, Error)]
pub enum ArrangeError {
    /// A single slot is wider than the whole figure.
    #[error("slot width {slot_width} exceeds figure width {figure_width}")]
    SlotTooWide {
        /// The offending slot's width.
        slot_width: f64,
        /// The available figure width.
        figure_width: f64,
    },
}

/// Rows of placed slots. See [`fill_rows`].
#[derive(Clone, Debug)]
pub struct Arrangement {
    rows: Vec<Vec<Placement>>,
    figure_width: f64,
}

impl Arrangement {
    /// The placed rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Placement>] {
        &self.rows
    }

    /// Number of rows used.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Widest row length in slots.
    pub fn n_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The figure width the arrangement was packed against.
    pub const fn figure_width(&self) -> f64 {
        self.figure_width
    }
}

/// Pack slots into rows of at most `figure_width`, in the given order.
///
/// # Errors
/// [`ArrangeError::SlotTooWide`] if any slot alone exceeds the width.
pub fn fill_rows(slots: Vec<Slot>, figure_width: f64) -> Result<Arrangement, ArrangeError> {
    let widest = slots.iter().map(|s| s.width).fold(0.0_f64, f64::max);
    if widest > figure_width {
        return Err(ArrangeError::SlotTooWide { slot_width: widest, figure_width });
    }

    let mut rows: Vec<Vec<Placement>> = Vec::new();
    let mut current: Vec<Placement> = Vec::new();
    let mut current_width = 0.0;
    let mut n_row = 0;

    for (n_slot, slot) in slots.into_iter().enumerate() {
        let new_width = current_width + slot.width;
        if new_width <= figure_width {
            log::debug!("slot {n_slot} at ({current_width} -> {new_width}) on row {n_row}");
            current.push(Placement {
                span: (current_width, new_width),
                grid: (current.len(), n_row),
                slot,
            });
            current_width = new_width;
        } else {
            n_row += 1;
            current_width = slot.width;
            log::debug!("new row for slot {n_slot} at (0 -> {current_width})");
            rows.push(std::mem::take(&mut current));
            current.push(Placement {
                span: (0.0, current_width),
                grid: (0, n_row),
                slot,
            });
        }
    }
    rows.push(current);

    Ok(Arrangement { rows, figure_width })
}
