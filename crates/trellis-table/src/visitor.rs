//! Visitors over table element trees.

use crate::element::{ElementId, TableElement};

/// Receives each element of a tree, descendants before ancestors.
pub trait TableElementVisitor {
    fn visit(&mut self, element: &dyn TableElement);
}

impl<F> TableElementVisitor for F
where
    F: FnMut(&dyn TableElement),
{
    fn visit(&mut self, element: &dyn TableElement) {
        (*self)(element)
    }
}

/// Collects the ids of visited elements in visit order.
#[derive(Debug, Clone, Default)]
pub struct ElementCollector {
    ids: Vec<ElementId>,
    classes: Vec<Option<String>>,
}

impl ElementCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    /// Ids of visited elements whose `class` property equals `class`.
    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.ids
            .iter()
            .zip(&self.classes)
            .filter(|(_, c)| c.as_deref() == Some(class))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn into_ids(self) -> Vec<ElementId> {
        self.ids
    }
}

impl TableElementVisitor for ElementCollector {
    fn visit(&mut self, element: &dyn TableElement) {
        self.ids.push(element.id());
        self.classes
            .push(element.style().class().map(str::to_string));
    }
}
