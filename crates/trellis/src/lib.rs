//! Trellis - chart datasets and layout building blocks
//!
//! Trellis bundles the pieces a chart renderer needs before it paints a
//! single axis:
//!
//! - **Data**: keyed 2D/3D value tables with insertion-ordered axes
//! - **Table layout**: grids of text and shape elements for legends and titles
//! - **Core**: geometry, colours, logging and profiling setup
//!
//! # Quick Start
//!
//! ```ignore
//! use trellis::prelude::*;
//!
//! trellis::core::init(&Config::default());
//!
//! let mut sales = DefaultKeyedValues3D::new();
//! sales.set_value(Some(12.0), "2025", "Q1", "North");
//!
//! let legend = GridElement::new()
//!     .with_element(ShapeElement::new(Size::new(8.0, 8.0), Color::BLUE)?, "2025".into(), "marker".into())
//!     .with_element(TextElement::new("2025"), "2025".into(), "label".into());
//! legend.draw(&mut surface, area, None);
//! ```
//!
//! # Features
//!
//! - `table` (default): re-exports `trellis-table`
//! - `serde`: serialization for the default data tables

pub use trellis_core as core;
pub use trellis_data as data;

#[cfg(feature = "table")]
pub use trellis_table as table;

/// Prelude module for convenient imports
pub mod prelude {
    pub use trellis_core::{Color, Config, Insets, ProfilingMode, Rect, Size, Vec2};

    pub use trellis_data::{
        DataError, DataResult, DefaultKeyedValues2D, DefaultKeyedValues3D, KeyedValues2D,
        KeyedValues3D, ValueRange, Values2D, Values3D, find_value_range,
    };

    #[cfg(feature = "table")]
    pub use trellis_table::{
        BoundsRecorder, ElementStyle, Font, GridElement, HAlign, ShapeElement, Surface,
        TableElement, TableElementVisitor, TableError, TextElement,
    };
}
