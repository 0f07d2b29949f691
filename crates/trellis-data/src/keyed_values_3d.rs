//! 3D table built from congruent 2D slices, one per series.

use crate::error::{Axis, DataError, DataResult};
use crate::key::Key;
use crate::keyed_values_2d::DefaultKeyedValues2D;
use crate::traits::{KeyedValues3D, Values2D, Values3D};
use indexmap::IndexSet;
use trellis_core::profiling::profile_function;

/// A 3D table of optional values keyed by series, row and column.
///
/// Every series slice shares the same row and column axes in the same
/// order. Writing a new row or column key into one series back-fills an
/// absent cell into every other series, so all slices stay rectangular and
/// can be indexed uniformly.
///
/// # Example
///
/// ```
/// use trellis_data::{DefaultKeyedValues3D, KeyedValues3D, Values3D};
///
/// let mut dataset = DefaultKeyedValues3D::new();
/// dataset.set_value(Some(1.0), "Sales", "2024", "Q1");
/// dataset.set_value(Some(2.0), "Costs", "2025", "Q2");
///
/// assert_eq!(dataset.series_count(), 2);
/// assert_eq!(dataset.row_keys(), vec![&"2024", &"2025"]);
/// // "Costs" never wrote 2024/Q1, but the cell exists and is absent.
/// assert_eq!(dataset.value_by_key(&"Costs", &"2024", &"Q1"), Ok(None));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(
        try_from = "serde_repr::RawKeyedValues3D<S, R, C, T>",
        bound(
            serialize = "S: serde::Serialize, R: serde::Serialize, C: serde::Serialize, T: serde::Serialize",
            deserialize = "S: Key + serde::Deserialize<'de>, R: Key + serde::Deserialize<'de>, C: Key + serde::Deserialize<'de>, T: serde::Deserialize<'de>"
        )
    )
)]
pub struct DefaultKeyedValues3D<S, R, C, T = f64> {
    series_keys: IndexSet<S>,
    row_keys: IndexSet<R>,
    column_keys: IndexSet<C>,
    /// One slice per series key, in series order.
    data: Vec<DefaultKeyedValues2D<R, C, T>>,
}

impl<S, R, C, T> Default for DefaultKeyedValues3D<S, R, C, T> {
    fn default() -> Self {
        Self {
            series_keys: IndexSet::new(),
            row_keys: IndexSet::new(),
            column_keys: IndexSet::new(),
            data: Vec::new(),
        }
    }
}

impl<S: Key, R: Key, C: Key, T> DefaultKeyedValues3D<S, R, C, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first value is set.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The 2D slice holding the values of one series.
    pub fn slice(&self, series: usize) -> DataResult<&DefaultKeyedValues2D<R, C, T>> {
        let len = self.data.len();
        self.data
            .get(series)
            .ok_or(DataError::IndexOutOfRange {
                axis: Axis::Series,
                index: series,
                len,
            })
    }

    /// Store `value` at (`series_key`, `row_key`, `column_key`).
    ///
    /// Unknown keys are appended to their axis. A new row or column key is
    /// back-filled as absent into every existing series; a new series key
    /// gets a fresh slice spanning the current row and column axes. `None`
    /// clears the cell without removing any key.
    pub fn set_value(&mut self, value: Option<T>, series_key: S, row_key: R, column_key: C) {
        profile_function!();

        if self.data.is_empty() {
            debug_assert!(
                self.series_keys.is_empty()
                    && self.row_keys.is_empty()
                    && self.column_keys.is_empty(),
                "axes populated without any series slice"
            );
            tracing::trace!(?series_key, ?row_key, ?column_key, "seeding first series");

            let mut slice = DefaultKeyedValues2D::new();
            slice.set_value(value, row_key.clone(), column_key.clone());
            self.series_keys.insert(series_key);
            self.row_keys.insert(row_key);
            self.column_keys.insert(column_key);
            self.data.push(slice);
            return;
        }

        let series_index = self.series_keys.get_index_of(&series_key);
        let new_row = self.row_keys.insert(row_key.clone());
        let new_column = self.column_keys.insert(column_key.clone());

        if new_row || new_column {
            tracing::trace!(
                ?row_key,
                ?column_key,
                series = self.data.len(),
                "back-filling new key into existing series"
            );
            for slice in &mut self.data {
                slice.set_value(None, row_key.clone(), column_key.clone());
            }
        }

        match series_index {
            Some(index) => self.data[index].set_value(value, row_key, column_key),
            None => {
                tracing::trace!(?series_key, "adding series");
                let mut slice = DefaultKeyedValues2D::with_keys(
                    self.row_keys.iter().cloned(),
                    self.column_keys.iter().cloned(),
                );
                slice.set_value(value, row_key, column_key);
                self.series_keys.insert(series_key);
                self.data.push(slice);
            }
        }
    }
}

impl<S: Key, R: Key, C: Key, T> Values3D for DefaultKeyedValues3D<S, R, C, T> {
    type Value = T;

    fn series_count(&self) -> usize {
        self.series_keys.len()
    }

    fn row_count(&self) -> usize {
        self.row_keys.len()
    }

    fn column_count(&self) -> usize {
        self.column_keys.len()
    }

    fn value(&self, series: usize, row: usize, column: usize) -> DataResult<Option<&T>> {
        self.slice(series)?.value(row, column)
    }
}

impl<S: Key, R: Key, C: Key, T> KeyedValues3D for DefaultKeyedValues3D<S, R, C, T> {
    type SeriesKey = S;
    type RowKey = R;
    type ColumnKey = C;

    fn series_key(&self, index: usize) -> DataResult<&S> {
        key_at(&self.series_keys, Axis::Series, index)
    }

    fn row_key(&self, index: usize) -> DataResult<&R> {
        key_at(&self.row_keys, Axis::Row, index)
    }

    fn column_key(&self, index: usize) -> DataResult<&C> {
        key_at(&self.column_keys, Axis::Column, index)
    }

    fn series_index(&self, key: &S) -> Option<usize> {
        self.series_keys.get_index_of(key)
    }

    fn row_index(&self, key: &R) -> Option<usize> {
        self.row_keys.get_index_of(key)
    }

    fn column_index(&self, key: &C) -> Option<usize> {
        self.column_keys.get_index_of(key)
    }

    fn series_keys(&self) -> Vec<&S> {
        self.series_keys.iter().collect()
    }

    fn row_keys(&self) -> Vec<&R> {
        self.row_keys.iter().collect()
    }

    fn column_keys(&self) -> Vec<&C> {
        self.column_keys.iter().collect()
    }
}

fn key_at<K: Key>(keys: &IndexSet<K>, axis: Axis, index: usize) -> DataResult<&K> {
    keys.get_index(index).ok_or(DataError::IndexOutOfRange {
        axis,
        index,
        len: keys.len(),
    })
}

impl<S: Key, R: Key, C: Key, T: PartialEq> PartialEq for DefaultKeyedValues3D<S, R, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.series_keys.iter().eq(other.series_keys.iter()) && self.data == other.data
    }
}

#[cfg(feature = "serde")]
pub(crate) mod serde_repr {
    use super::*;
    use crate::traits::KeyedValues2D;

    #[derive(serde::Deserialize)]
    #[serde(bound(
        deserialize = "S: serde::Deserialize<'de>, R: Key + serde::Deserialize<'de>, C: Key + serde::Deserialize<'de>, T: serde::Deserialize<'de>"
    ))]
    pub struct RawKeyedValues3D<S, R, C, T> {
        series_keys: Vec<S>,
        row_keys: Vec<R>,
        column_keys: Vec<C>,
        data: Vec<DefaultKeyedValues2D<R, C, T>>,
    }

    impl<S: Key, R: Key, C: Key, T> TryFrom<RawKeyedValues3D<S, R, C, T>>
        for DefaultKeyedValues3D<S, R, C, T>
    {
        type Error = DataError;

        fn try_from(raw: RawKeyedValues3D<S, R, C, T>) -> DataResult<Self> {
            let series_count = raw.series_keys.len();
            let series_keys: IndexSet<S> = raw.series_keys.into_iter().collect();
            if series_keys.len() != series_count || raw.data.len() != series_count {
                return Err(DataError::Malformed(
                    "series keys do not match series slices".to_string(),
                ));
            }
            let row_count = raw.row_keys.len();
            let column_count = raw.column_keys.len();
            let row_keys: IndexSet<R> = raw.row_keys.into_iter().collect();
            let column_keys: IndexSet<C> = raw.column_keys.into_iter().collect();
            if row_keys.len() != row_count || column_keys.len() != column_count {
                return Err(DataError::Malformed("duplicate keys".to_string()));
            }
            // Axes are only ever seeded together with the first slice.
            if raw.data.is_empty() && (row_count > 0 || column_count > 0) {
                return Err(DataError::Malformed(
                    "row or column keys without any series".to_string(),
                ));
            }
            let congruent = raw.data.iter().all(|slice| {
                slice.row_keys().into_iter().eq(row_keys.iter())
                    && slice.column_keys().into_iter().eq(column_keys.iter())
            });
            if !congruent {
                return Err(DataError::Malformed(
                    "series slices do not share the row and column axes".to_string(),
                ));
            }
            Ok(Self {
                series_keys,
                row_keys,
                column_keys,
                data: raw.data,
            })
        }
    }
}
