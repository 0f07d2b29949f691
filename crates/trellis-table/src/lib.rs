//! Trellis Table - grid layout for chart furniture
//!
//! Titles, legends and other chart decorations are built as trees of
//! [`TableElement`]s. A [`GridElement`] arranges children in keyed rows and
//! columns; leaves such as [`TextElement`] and [`ShapeElement`] measure and
//! paint themselves through a host-supplied [`Surface`].
//!
//! # Layout model
//!
//! - Each child is measured against the grid's outer bounds
//! - Column width is the widest child in the column, row height the tallest
//!   child in the row
//! - The grid's preferred size is the sum of those plus its insets
//!
//! Layout and draw passes recompute everything; pass a [`BoundsRecorder`] to
//! `draw` to capture where each element landed for hit-testing.
//!
//! # Example
//!
//! ```ignore
//! use trellis_table::*;
//!
//! let legend = GridElement::new()
//!     .with_element(ShapeElement::new(Size::new(8.0, 8.0), Color::RED)?, "Sales".into(), "marker".into())
//!     .with_element(TextElement::new("Sales"), "Sales".into(), "label".into());
//!
//! let mut recorder = BoundsRecorder::new();
//! let size = legend.preferred_size(&surface, area, None);
//! legend.draw(&mut surface, Rect::from_pos_size(area.position(), size), Some(&mut recorder));
//! ```

mod bounds;
mod element;
mod error;
mod grid;
mod shape;
mod style;
mod surface;
mod text;
mod visitor;

pub use bounds::BoundsRecorder;
pub use element::{ElementId, TableElement};
pub use error::{TableError, TableResult};
pub use grid::GridElement;
pub use shape::ShapeElement;
pub use style::{CLASS, Constraints, ElementStyle, PropertyMap, PropertyValue};
pub use surface::{Font, Surface};
pub use text::{HAlign, TextElement};
pub use visitor::{ElementCollector, TableElementVisitor};

pub use trellis_core::{Color, Insets, Rect, Size, Vec2};
