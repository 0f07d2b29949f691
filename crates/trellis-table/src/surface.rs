//! The drawing capability table elements render through.

use crate::error::{TableError, TableResult};
use trellis_core::{Color, Rect, Size, Vec2};

/// Font request passed to the surface for measuring and drawing text.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    /// Point size, always finite and positive.
    size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> TableResult<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(TableError::invalid(
                "size",
                format!("font size must be positive, got {}", size),
            ));
        }
        Ok(Self {
            family: family.into(),
            size,
        })
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "SansSerif".to_string(),
            size: 12.0,
        }
    }
}

/// A 2D drawing target supplied by the host toolkit.
///
/// Measurement takes `&self` so layout passes stay read-only; painting takes
/// `&mut self`.
pub trait Surface {
    /// Size of the box `text` occupies when drawn with `font`.
    fn text_size(&self, text: &str, font: &Font) -> Size;

    /// Fill `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its box's top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, font: &Font, color: Color, origin: Vec2);
}
