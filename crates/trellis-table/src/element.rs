//! The element capability shared by leaves and grids.

use crate::bounds::BoundsRecorder;
use crate::style::{Constraints, ElementStyle};
use crate::surface::Surface;
use crate::visitor::TableElementVisitor;
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use trellis_core::{Rect, Size};

/// Identity of an element, used to key recorded bounds.
///
/// Ids are unique per process and are not part of element equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A measurable, drawable node in a table layout tree.
///
/// Layout is recomputed on every call; nothing is cached between passes.
pub trait TableElement: fmt::Debug + Any {
    fn id(&self) -> ElementId;

    fn style(&self) -> &ElementStyle;

    fn style_mut(&mut self) -> &mut ElementStyle;

    /// Size this element would like when given `bounds`, insets included.
    fn preferred_size(
        &self,
        surface: &dyn Surface,
        bounds: Rect,
        constraints: Option<&Constraints>,
    ) -> Size;

    /// Rectangles for this element's content within `bounds`.
    fn layout_elements(
        &self,
        surface: &dyn Surface,
        bounds: Rect,
        constraints: Option<&Constraints>,
    ) -> Vec<Rect>;

    /// Paint into `bounds`.
    ///
    /// With a recorder, this element and every drawn descendant store the
    /// bounds they were drawn into.
    fn draw(&self, surface: &mut dyn Surface, bounds: Rect, recorder: Option<&mut BoundsRecorder>);

    /// Visit descendants first, then this element.
    fn receive(&self, visitor: &mut dyn TableElementVisitor);

    fn as_any(&self) -> &dyn Any;

    /// Structural equality against another element of any type.
    fn eq_element(&self, other: &dyn TableElement) -> bool;

    fn debug_name(&self) -> &str {
        "TableElement"
    }
}

impl PartialEq for dyn TableElement {
    fn eq(&self, other: &Self) -> bool {
        self.eq_element(other)
    }
}

/// `eq_element` for concrete types: equal only to the same type.
pub(crate) fn eq_as<T>(this: &T, other: &dyn TableElement) -> bool
where
    T: TableElement + PartialEq,
{
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ElementId::next();
        let b = ElementId::next();
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
        assert_eq!(format!("{}", ElementId(7)), "#7");
    }
}
