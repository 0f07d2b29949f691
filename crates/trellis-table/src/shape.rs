//! Fixed-size colour swatch, typically a legend marker.

use crate::bounds::BoundsRecorder;
use crate::element::{ElementId, TableElement, eq_as};
use crate::error::{TableError, TableResult};
use crate::style::{Constraints, ElementStyle};
use crate::surface::Surface;
use crate::visitor::TableElementVisitor;
use std::any::Any;
use trellis_core::{Color, Rect, Size, Vec2};

#[derive(Debug, Clone)]
pub struct ShapeElement {
    id: ElementId,
    style: ElementStyle,
    size: Size,
    color: Color,
}

impl ShapeElement {
    /// A swatch of `size` filled with `color`.
    ///
    /// Both dimensions must be finite and non-negative.
    pub fn new(size: Size, color: Color) -> TableResult<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !(valid(size.width) && valid(size.height)) {
            return Err(TableError::invalid(
                "size",
                format!("shape size must be finite and non-negative, got {}", size),
            ));
        }
        Ok(Self {
            id: ElementId::next(),
            style: ElementStyle::default(),
            size,
            color,
        })
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The swatch centred inside the insets of `bounds`.
    fn shape_rect(&self, bounds: Rect) -> Rect {
        let center = bounds.shrink(&self.style.insets()).center();
        let half = Vec2::from(self.size) * 0.5;
        Rect::from_pos_size(center - half, self.size)
    }
}

impl TableElement for ShapeElement {
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
        _surface: &dyn Surface,
        _bounds: Rect,
        _constraints: Option<&Constraints>,
    ) -> Size {
        self.size.expand(&self.style.insets())
    }

    fn layout_elements(
        &self,
        _surface: &dyn Surface,
        bounds: Rect,
        _constraints: Option<&Constraints>,
    ) -> Vec<Rect> {
        vec![self.shape_rect(bounds)]
    }

    fn draw(&self, surface: &mut dyn Surface, bounds: Rect, recorder: Option<&mut BoundsRecorder>) {
        if let Some(recorder) = recorder {
            recorder.record(self.id, bounds);
        }
        if let Some(background) = self.style.background() {
            surface.fill_rect(bounds, background);
        }
        surface.fill_rect(self.shape_rect(bounds), self.color);
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
        "ShapeElement"
    }
}

impl PartialEq for ShapeElement {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.color == other.color && self.style == other.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::Insets;

    #[test]
    fn test_rejects_invalid_size() {
        assert!(ShapeElement::new(Size::new(-1.0, 2.0), Color::RED).is_err());
        assert!(ShapeElement::new(Size::new(1.0, f32::INFINITY), Color::RED).is_err());
        assert!(ShapeElement::new(Size::ZERO, Color::RED).is_ok());
    }

    #[test]
    fn test_shape_is_centred() {
        let shape = ShapeElement::new(Size::new(4.0, 2.0), Color::RED)
            .unwrap()
            .with_style(ElementStyle::new().with_insets(Insets::uniform(1.0)).unwrap());
        assert_eq!(
            shape.shape_rect(Rect::new(0.0, 0.0, 12.0, 12.0)),
            Rect::new(4.0, 5.0, 4.0, 2.0)
        );
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = ShapeElement::new(Size::new(1.0, 1.0), Color::BLUE).unwrap();
        let b = ShapeElement::new(Size::new(1.0, 1.0), Color::BLUE).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
        assert!(a.eq_element(&b));
    }
}
