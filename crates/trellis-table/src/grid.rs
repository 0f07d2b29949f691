//! A table element that lays out child elements in a keyed grid.

use crate::bounds::BoundsRecorder;
use crate::element::{ElementId, TableElement, eq_as};
use crate::style::{Constraints, ElementStyle};
use crate::surface::Surface;
use crate::visitor::TableElementVisitor;
use std::any::Any;
use std::fmt;
use trellis_core::profiling::profile_function;
use trellis_core::{Rect, Size};
use trellis_data::{DataResult, DefaultKeyedValues2D, Key, KeyedValues2D, Values2D};

/// A grid of child elements addressed by row and column keys.
///
/// Every cell in a column shares that column's width (the widest child in
/// it) and every cell in a row shares that row's height. Empty cells still
/// take up their row height and column width.
///
/// # Example
///
/// ```ignore
/// let mut legend = GridElement::new();
/// legend.set_element(Some(Box::new(swatch)), "series-1", "marker");
/// legend.set_element(Some(Box::new(label)), "series-1", "label");
///
/// let size = legend.preferred_size(&surface, bounds, None);
/// legend.draw(&mut surface, Rect::from_pos_size(origin, size), None);
/// ```
#[derive(Debug)]
pub struct GridElement<K = String> {
    id: ElementId,
    style: ElementStyle,
    elements: DefaultKeyedValues2D<K, K, Box<dyn TableElement>>,
}

impl<K: Key + 'static> Default for GridElement<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key + 'static> GridElement<K> {
    /// Create an empty grid with no background and zero insets.
    pub fn new() -> Self {
        Self {
            id: ElementId::next(),
            style: ElementStyle::default(),
            elements: DefaultKeyedValues2D::new(),
        }
    }

    /// Builder form of [`set_style`](Self::set_style).
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    /// Add or replace the element at (`row_key`, `column_key`).
    ///
    /// `None` leaves the cell empty; the keys are still added to the grid.
    pub fn set_element(
        &mut self,
        element: Option<Box<dyn TableElement>>,
        row_key: K,
        column_key: K,
    ) {
        self.elements.set_value(element, row_key, column_key);
    }

    /// Builder form of [`set_element`](Self::set_element).
    pub fn with_element(mut self, element: impl TableElement, row_key: K, column_key: K) -> Self {
        self.set_element(Some(Box::new(element)), row_key, column_key);
        self
    }

    pub fn row_count(&self) -> usize {
        self.elements.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.elements.column_count()
    }

    pub fn row_keys(&self) -> Vec<&K> {
        self.elements.row_keys()
    }

    pub fn column_keys(&self) -> Vec<&K> {
        self.elements.column_keys()
    }

    /// The element at (`row`, `column`), `None` for an empty cell.
    pub fn element(&self, row: usize, column: usize) -> DataResult<Option<&dyn TableElement>> {
        Ok(self.elements.value(row, column)?.map(|e| &**e))
    }

    /// Key-addressed [`element`](Self::element); unknown keys are an error.
    pub fn element_by_key(&self, row_key: &K, column_key: &K) -> DataResult<Option<&dyn TableElement>> {
        Ok(self.elements.value_by_key(row_key, column_key)?.map(|e| &**e))
    }

    /// Mutable access to a cell's element.
    pub fn element_mut(
        &mut self,
        row: usize,
        column: usize,
    ) -> DataResult<Option<&mut (dyn TableElement + 'static)>> {
        Ok(self.elements.value_mut(row, column)?.as_deref_mut())
    }

    /// Column widths and row heights for a layout pass.
    ///
    /// Each child is measured against the grid's full `bounds`, then packed
    /// by per-column and per-row maxima. There is no second pass.
    fn cell_dimensions(&self, surface: &dyn Surface, bounds: Rect) -> (Vec<f32>, Vec<f32>) {
        let mut widths = vec![0.0_f32; self.elements.column_count()];
        let mut heights = vec![0.0_f32; self.elements.row_count()];
        for (row, column, element) in self.elements.iter() {
            let size = element.preferred_size(surface, bounds, None);
            widths[column] = widths[column].max(size.width);
            heights[row] = heights[row].max(size.height);
        }
        (widths, heights)
    }
}

impl<K: Key + 'static> TableElement for GridElement<K> {
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
        bounds: Rect,
        _constraints: Option<&Constraints>,
    ) -> Size {
        profile_function!();
        let (widths, heights) = self.cell_dimensions(surface, bounds);
        Size::new(widths.iter().sum(), heights.iter().sum()).expand(&self.style.insets())
    }

    /// One rectangle per cell in row-major order, empty cells included.
    fn layout_elements(
        &self,
        surface: &dyn Surface,
        bounds: Rect,
        _constraints: Option<&Constraints>,
    ) -> Vec<Rect> {
        profile_function!();
        let (widths, heights) = self.cell_dimensions(surface, bounds);
        let insets = self.style.insets();

        let mut result = Vec::with_capacity(widths.len() * heights.len());
        let mut y = bounds.y + insets.top;
        for height in &heights {
            let mut x = bounds.x + insets.left;
            for width in &widths {
                result.push(Rect::new(x, y, *width, *height));
                x += width;
            }
            y += height;
        }
        tracing::trace!(
            rows = heights.len(),
            columns = widths.len(),
            "grid layout computed"
        );
        result
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        bounds: Rect,
        mut recorder: Option<&mut BoundsRecorder>,
    ) {
        profile_function!();
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(self.id, bounds);
        }
        if let Some(background) = self.style.background() {
            surface.fill_rect(bounds, background);
        }

        let positions = self.layout_elements(&*surface, bounds, None);
        let columns = self.elements.column_count();
        tracing::debug!(
            id = %self.id,
            rows = self.elements.row_count(),
            columns,
            "drawing grid"
        );
        for (row, column, element) in self.elements.iter() {
            element.draw(surface, positions[row * columns + column], recorder.as_deref_mut());
        }
    }

    fn receive(&self, visitor: &mut dyn TableElementVisitor) {
        for (_, _, element) in self.elements.iter() {
            element.receive(visitor);
        }
        visitor.visit(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_element(&self, other: &dyn TableElement) -> bool {
        eq_as(self, other)
    }

    fn debug_name(&self) -> &str {
        "GridElement"
    }
}

/// Grids are equal when their cell tables are: same keys, same order, and
/// structurally equal children. Style and id are not compared.
impl<K: Key + 'static> PartialEq for GridElement<K> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<K: Key + 'static> fmt::Display for GridElement<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridElement[rowCount={}, columnCount={}]",
            self.elements.row_count(),
            self.elements.column_count()
        )
    }
}
