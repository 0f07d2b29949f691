//! Single-line text element.

use crate::bounds::BoundsRecorder;
use crate::element::{ElementId, TableElement, eq_as};
use crate::style::{Constraints, ElementStyle};
use crate::surface::{Font, Surface};
use crate::visitor::TableElementVisitor;
use std::any::Any;
use trellis_core::{Color, Rect, Size};

/// Horizontal placement of content inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A line of text, measured and drawn by the [`Surface`].
#[derive(Debug, Clone)]
pub struct TextElement {
    id: ElementId,
    style: ElementStyle,
    text: String,
    font: Font,
    color: Color,
    alignment: HAlign,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ElementId::next(),
            style: ElementStyle::default(),
            text: text.into(),
            font: Font::default(),
            color: Color::BLACK,
            alignment: HAlign::Left,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: HAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, returning whether it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alignment(&self) -> HAlign {
        self.alignment
    }

    /// Where the text box sits inside `bounds`.
    fn text_rect(&self, surface: &dyn Surface, bounds: Rect) -> Rect {
        let inner = bounds.shrink(&self.style.insets());
        let size = surface.text_size(&self.text, &self.font);
        let x = match self.alignment {
            HAlign::Left => inner.x,
            HAlign::Center => inner.x + (inner.width - size.width) * 0.5,
            HAlign::Right => inner.right() - size.width,
        };
        Rect::new(x, inner.y, size.width, size.height)
    }
}

impl TableElement for TextElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    fn preferred_size(
        &self,
        surface: &dyn Surface,
        _bounds: Rect,
        _constraints: Option<&Constraints>,
    ) -> Size {
        surface
            .text_size(&self.text, &self.font)
            .expand(&self.style.insets())
    }

    fn layout_elements(
        &self,
        surface: &dyn Surface,
        bounds: Rect,
        _constraints: Option<&Constraints>,
    ) -> Vec<Rect> {
        vec![self.text_rect(surface, bounds)]
    }

    fn draw(&self, surface: &mut dyn Surface, bounds: Rect, recorder: Option<&mut BoundsRecorder>) {
        if let Some(recorder) = recorder {
            recorder.record(self.id, bounds);
        }
        if let Some(background) = self.style.background() {
            surface.fill_rect(bounds, background);
        }
        let rect = self.text_rect(&*surface, bounds);
        surface.draw_text(&self.text, &self.font, self.color, rect.position());
    }

    fn receive(&self, visitor: &mut dyn TableElementVisitor) {
        visitor.visit(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_element(&self, other: &dyn TableElement) -> bool {
        eq_as(self, other)
    }

    fn debug_name(&self) -> &str {
        "TextElement"
    }
}

impl PartialEq for TextElement {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.font == other.font
            && self.color == other.color
            && self.alignment == other.alignment
            && self.style == other.style
    }
}
