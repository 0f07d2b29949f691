//! Trellis Data - keyed value tables for chart datasets
//!
//! This crate provides:
//! - [`DefaultKeyedValues2D`]: a sparse row/column table with insertion-ordered keys
//! - [`DefaultKeyedValues3D`]: a series of congruent 2D slices, the storage
//!   behind category charts
//! - Read-only traits ([`Values3D`], [`KeyedValues3D`], ...) that renderers consume
//! - Range and total helpers for axis auto-ranging
//!
//! # Example
//!
//! ```
//! use trellis_data::{DefaultKeyedValues3D, KeyedValues3D, Values3D, find_value_range};
//!
//! let mut data = DefaultKeyedValues3D::new();
//! data.set_value(Some(42.0), "S1", "R1", "C1");
//! data.set_value(Some(7.0), "S1", "R2", "C1");
//!
//! assert_eq!(data.row_count(), 2);
//! assert_eq!(data.double_value_by_key(&"S1", &"R1", &"C1"), Ok(42.0));
//! assert_eq!(find_value_range(&data).map(|r| r.length()), Some(35.0));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for both default tables. Deserialized
//!   tables are checked for duplicate keys and congruent slices.

mod error;
mod key;
mod keyed_values_2d;
mod keyed_values_3d;
mod summary;
mod traits;

pub use error::{Axis, DataError, DataResult};
pub use key::{Key, NumericValue};
pub use keyed_values_2d::DefaultKeyedValues2D;
pub use keyed_values_3d::DefaultKeyedValues3D;
pub use summary::{ValueRange, count, find_value_range, series_total, total};
pub use traits::{KeyedValues2D, KeyedValues3D, Values2D, Values3D};
