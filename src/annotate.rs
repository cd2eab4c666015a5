//! Annotation: panel labels and the glyph renderer that burns them in.
//!
//! Labels carry text, a relative position inside the panel, a colour, and
//! a pixel size. They are burned into a panel's resized pixels immediately
//! before the buffer write, so the label ends up crisp at the final
//! resolution regardless of how the layout rescaled the panel.
//!
//! Glyphs come from an embedded 5x7 raster font scaled by whole pixels —
//! enough for the short index labels ("a.", "ii)", "3.") that figure
//! panels carry.

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Default label height in pixels.
pub const DEFAULT_LABEL_SIZE: u32 = 50;

/// Default relative position: just inside the panel's top-left corner.
const DEFAULT_POS: (f64, f64) = (0.05, 0.05);

/// Glyph cell width in font units.
const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font units.
const GLYPH_HEIGHT: u32 = 7;

/// Error raised when a label is constructed with bad parameters.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The relative position fell outside the unit square.
    #[error("label position must lie in [0, 1] x [0, 1]: ({x}, {y})")]
    PositionRange {
        /// Offending relative x.
        x: f64,
        /// Offending relative y.
        y: f64,
    },
}

/// A text annotation for one panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    text: String,
    /// Relative position in [0, 1] x [0, 1] of the text's top-left corner.
    pos: (f64, f64),
    color: Rgba<u8>,
    size: u32,
}

impl Label {
    /// Create a label at the default corner position.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: DEFAULT_POS,
            color: Rgba([0, 0, 0, 255]),
            size: DEFAULT_LABEL_SIZE,
        }
    }

    /// Place the label at a relative position inside the panel.
    ///
    /// # Errors
    /// [`LabelError::PositionRange`] if either coordinate is outside
    /// [0, 1].
    pub fn at(mut self, x: f64, y: f64) -> Result<Self, LabelError> {
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Err(LabelError::PositionRange { x, y });
        }
        self.pos = (x, y);
        Ok(self)
    }

    /// Set the label colour.
    #[must_use]
    pub const fn with_color(mut self, rgb: [u8; 3]) -> Self {
        self.color = Rgba([rgb[0], rgb[1], rgb[2], 255]);
        self
    }

    /// Set the label height in pixels.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Relative position inside the panel.
    pub const fn pos(&self) -> (f64, f64) {
        self.pos
    }

    /// Label colour.
    pub const fn color(&self) -> Rgba<u8> {
        self.color
    }

    /// Label height in pixels.
    pub const fn size(&self) -> u32 {
        self.size
    }
}

/// Generates a run of default labels from a format template.
///
/// The template may contain `{n}` (1-based number) or `{a}` (alphabetic
/// counter: a, b, .., z, aa, ..). Anything else is passed through
/// verbatim, so "{a})" produces "a)", "b)", and so on.
#[derive(Clone, Debug)]
pub struct LabelSequence {
    format: String,
    index: usize,
}

impl LabelSequence {
    /// Create a sequence from a format template.
    pub fn new(format: impl Into<String>) -> Self {
        Self { format: format.into(), index: 0 }
    }

    /// The conventional numeric sequence: "1.", "2.", ..
    pub fn numeric() -> Self {
        Self::new("{n}.")
    }

    /// The conventional alphabetic sequence: "a.", "b.", ..
    pub fn alphabetic() -> Self {
        Self::new("{a}.")
    }

    fn render(&self, index: usize) -> String {
        self.format
            .replace("{n}", &(index + 1).to_string())
            .replace("{a}", &alpha_name(index))
    }
}

impl Iterator for LabelSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let text = self.render(self.index);
        self.index += 1;
        Some(text)
    }
}

/// Spreadsheet-style alphabetic counter: 0 -> "a", 25 -> "z", 26 -> "aa".
fn alpha_name(mut index: usize) -> String {
    let mut out = String::new();
    loop {
        out.insert(0, char::from(b'a' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out
}

/// Burn a label into a panel's pixels.
///
/// The glyph height is scaled to the nearest whole multiple of the font
/// height that fits `label.size()`. Pixels falling outside the panel are
/// clipped.
pub fn draw_label(target: &mut RgbaImage, label: &Label) {
    let scale = (label.size() / GLYPH_HEIGHT).max(1);
    let (rel_x, rel_y) = label.pos();
    let origin_x = (rel_x * f64::from(target.width())).round() as i64;
    let origin_y = (rel_y * f64::from(target.height())).round() as i64;

    let mut pen_x = origin_x;
    for ch in label.text().chars() {
        let rows = glyph(ch);
        for (gy, row) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if row & (0b1_0000 >> gx) == 0 {
                    continue;
                }
                fill_block(
                    target,
                    pen_x + i64::from(gx * scale),
                    origin_y + (gy as i64) * i64::from(scale),
                    scale,
                    label.color(),
                );
            }
        }
        pen_x += i64::from((GLYPH_WIDTH + 1) * scale);
    }
}

/// Fill a `scale` x `scale` block, clipping at the image bounds.
fn fill_block(target: &mut RgbaImage, x: i64, y: i64, scale: u32, color: Rgba<u8>) {
    for dy in 0..i64::from(scale) {
        for dx in 0..i64::from(scale) {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && px < i64::from(target.width()) && py < i64::from(target.height())
            {
                target.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// 5x7 glyph rows, top to bottom; bit 4 is the leftmost column.
///
/// Covers lowercase letters (uppercase is folded down), digits, and the
/// punctuation that shows up in panel labels. Unknown characters render
/// as a hollow box.
#[rustfmt::skip]
const fn glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_lowercase() {
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b11001, 0b10110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10011, 0b01101],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10101, 0b10101],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b00000, 0b10110, 0b11001, 0b11001, 0b10110, 0b10000],
        'q' => [0b00000, 0b00000, 0b01101, 0b10011, 0b10011, 0b01101, 0b00001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b00000, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
