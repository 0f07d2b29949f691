//! Bounds captured during a draw pass, for hit-testing afterwards.

use crate::element::ElementId;
use indexmap::IndexMap;
use trellis_core::{Rect, Vec2};

/// Records the rectangle each element was drawn into.
///
/// Pass `Some(&mut recorder)` to `draw`; entries are kept in draw order, so
/// an ancestor always precedes its descendants.
#[derive(Debug, Clone, Default)]
pub struct BoundsRecorder {
    bounds: IndexMap<ElementId, Rect>,
}

impl BoundsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bounds for an element, replacing any earlier entry.
    pub fn record(&mut self, id: ElementId, bounds: Rect) {
        self.bounds.insert(id, bounds);
    }

    pub fn get(&self, id: ElementId) -> Option<Rect> {
        self.bounds.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn clear(&mut self) {
        self.bounds.clear();
    }

    /// Entries in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, Rect)> + '_ {
        self.bounds.iter().map(|(id, rect)| (*id, *rect))
    }

    /// Elements whose bounds contain `point`, outermost first.
    pub fn elements_at(&self, point: Vec2) -> Vec<ElementId> {
        self.bounds
            .iter()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(id, _)| *id)
            .collect()
    }
}
