//! Test utilities for Trellis.
//!
//! [`RecordingSurface`] is a [`Surface`] with deterministic text metrics
//! that records every paint call, so layout and draw behaviour can be
//! asserted without a windowing toolkit.
//!
//! # Example
//!
//! ```
//! use trellis_table::{Rect, Surface, TableElement, TextElement};
//! use trellis_test_utils::{DrawCall, RecordingSurface};
//!
//! let mut surface = RecordingSurface::new();
//! let label = TextElement::new("abc");
//!
//! // Default font is 12pt; each glyph advances half the point size.
//! let size = label.preferred_size(&surface, Rect::ZERO, None);
//! assert_eq!((size.width, size.height), (18.0, 12.0));
//!
//! label.draw(&mut surface, Rect::new(0.0, 0.0, 18.0, 12.0), None);
//! assert!(matches!(&surface.calls()[0], DrawCall::Text { text, .. } if text == "abc"));
//! ```

use parking_lot::Mutex;
use trellis_core::{Color, Rect, Size, Vec2};
use trellis_table::{Font, Surface};

/// A paint operation captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        font_size: f32,
        color: Color,
        origin: Vec2,
    },
}

/// Surface that records draw calls instead of painting.
///
/// Text measures `chars * font_size * advance` wide and
/// `font_size * line_height` tall.
///
/// # Interior Mutability
///
/// Measurement goes through `&self`, so the measurement counter sits behind
/// a `parking_lot::Mutex`.
#[derive(Debug)]
pub struct RecordingSurface {
    advance: f32,
    line_height: f32,
    calls: Vec<DrawCall>,
    measurements: Mutex<usize>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_metrics(0.5, 1.0)
    }

    /// Custom glyph advance and line height, both relative to font size.
    pub fn with_metrics(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
            calls: Vec::new(),
            measurements: Mutex::new(0),
        }
    }

    /// All recorded calls in paint order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Rectangles filled, in paint order.
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Strings drawn with their origins, in paint order.
    pub fn texts(&self) -> Vec<(String, Vec2)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, origin, .. } => Some((text.clone(), *origin)),
                _ => None,
            })
            .collect()
    }

    /// Number of `text_size` calls so far.
    pub fn measure_count(&self) -> usize {
        *self.measurements.lock()
    }

    /// Forget recorded calls and reset the measurement counter.
    pub fn clear(&mut self) {
        self.calls.clear();
        *self.measurements.lock() = 0;
    }
}

impl Surface for RecordingSurface {
    fn text_size(&self, text: &str, font: &Font) -> Size {
        *self.measurements.lock() += 1;
        let glyphs = text.chars().count() as f32;
        Size::new(
            glyphs * font.size() * self.advance,
            font.size() * self.line_height,
        )
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, origin: Vec2) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            font_size: font.size(),
            color,
            origin,
        });
    }
}
