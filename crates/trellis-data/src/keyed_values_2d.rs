//! Sparse 2D table addressed by row and column keys.

use crate::error::{Axis, DataError, DataResult};
use crate::key::Key;
use crate::traits::{KeyedValues2D, Values2D};
use indexmap::IndexSet;
use std::iter;

/// A 2D table of optional values with insertion-ordered row and column keys.
///
/// Every (row, column) slot exists once both keys are known; slots that were
/// never written hold `None`. Keys are never removed.
///
/// # Example
///
/// ```
/// use trellis_data::{DefaultKeyedValues2D, KeyedValues2D, Values2D};
///
/// let mut table = DefaultKeyedValues2D::new();
/// table.set_value(Some(1.5), "R1", "C1");
/// table.set_value(Some(2.0), "R2", "C2");
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.value_by_key(&"R1", &"C1"), Ok(Some(&1.5)));
/// assert_eq!(table.value_by_key(&"R1", &"C2"), Ok(None));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(
        try_from = "serde_repr::RawKeyedValues2D<R, C, T>",
        bound(
            serialize = "R: serde::Serialize, C: serde::Serialize, T: serde::Serialize",
            deserialize = "R: Key + serde::Deserialize<'de>, C: Key + serde::Deserialize<'de>, T: serde::Deserialize<'de>"
        )
    )
)]
pub struct DefaultKeyedValues2D<R, C, T> {
    row_keys: IndexSet<R>,
    column_keys: IndexSet<C>,
    /// Row-major cells, `data[row][column]`.
    data: Vec<Vec<Option<T>>>,
}

impl<R, C, T> Default for DefaultKeyedValues2D<R, C, T> {
    fn default() -> Self {
        Self {
            row_keys: IndexSet::new(),
            column_keys: IndexSet::new(),
            data: Vec::new(),
        }
    }
}

impl<R: Key, C: Key, T> DefaultKeyedValues2D<R, C, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the given axes and every cell absent.
    ///
    /// Duplicate keys are ignored.
    pub fn with_keys(
        row_keys: impl IntoIterator<Item = R>,
        column_keys: impl IntoIterator<Item = C>,
    ) -> Self {
        let row_keys: IndexSet<R> = row_keys.into_iter().collect();
        let column_keys: IndexSet<C> = column_keys.into_iter().collect();
        let data = (0..row_keys.len())
            .map(|_| empty_row(column_keys.len()))
            .collect();
        Self {
            row_keys,
            column_keys,
            data,
        }
    }

    /// True when no row or column key has been added.
    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty() && self.column_keys.is_empty()
    }

    /// Store `value` at (`row_key`, `column_key`), adding either key if new.
    ///
    /// `None` clears the cell. New keys widen the table with absent cells.
    pub fn set_value(&mut self, value: Option<T>, row_key: R, column_key: C) {
        let row = match self.row_keys.get_index_of(&row_key) {
            Some(index) => index,
            None => self.add_row(row_key),
        };
        let column = match self.column_keys.get_index_of(&column_key) {
            Some(index) => index,
            None => self.add_column(column_key),
        };
        self.data[row][column] = value;
    }

    /// Mutable access to a cell by index.
    pub fn value_mut(&mut self, row: usize, column: usize) -> DataResult<&mut Option<T>> {
        let row = DataError::check_index(Axis::Row, row, self.row_keys.len())?;
        let column = DataError::check_index(Axis::Column, column, self.column_keys.len())?;
        Ok(&mut self.data[row][column])
    }

    /// Iterate over present cells as `(row, column, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(column, cell)| cell.as_ref().map(|v| (row, column, v)))
        })
    }

    fn add_row(&mut self, key: R) -> usize {
        let (index, _) = self.row_keys.insert_full(key);
        self.data.push(empty_row(self.column_keys.len()));
        index
    }

    fn add_column(&mut self, key: C) -> usize {
        let (index, _) = self.column_keys.insert_full(key);
        for row in &mut self.data {
            row.push(None);
        }
        index
    }
}

fn empty_row<T>(len: usize) -> Vec<Option<T>> {
    iter::repeat_with(|| None).take(len).collect()
}

impl<R: Key, C: Key, T> Values2D for DefaultKeyedValues2D<R, C, T> {
    type Value = T;

    fn row_count(&self) -> usize {
        self.row_keys.len()
    }

    fn column_count(&self) -> usize {
        self.column_keys.len()
    }

    fn value(&self, row: usize, column: usize) -> DataResult<Option<&T>> {
        let row = DataError::check_index(Axis::Row, row, self.row_keys.len())?;
        let column = DataError::check_index(Axis::Column, column, self.column_keys.len())?;
        Ok(self.data[row][column].as_ref())
    }
}

impl<R: Key, C: Key, T> KeyedValues2D for DefaultKeyedValues2D<R, C, T> {
    type RowKey = R;
    type ColumnKey = C;

    fn row_key(&self, index: usize) -> DataResult<&R> {
        self.row_keys
            .get_index(index)
            .ok_or(DataError::IndexOutOfRange {
                axis: Axis::Row,
                index,
                len: self.row_keys.len(),
            })
    }

    fn column_key(&self, index: usize) -> DataResult<&C> {
        self.column_keys
            .get_index(index)
            .ok_or(DataError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                len: self.column_keys.len(),
            })
    }

    fn row_index(&self, key: &R) -> Option<usize> {
        self.row_keys.get_index_of(key)
    }

    fn column_index(&self, key: &C) -> Option<usize> {
        self.column_keys.get_index_of(key)
    }

    fn row_keys(&self) -> Vec<&R> {
        self.row_keys.iter().collect()
    }

    fn column_keys(&self) -> Vec<&C> {
        self.column_keys.iter().collect()
    }
}

/// Structural equality: same keys in the same order and equal cells.
impl<R: Key, C: Key, T: PartialEq> PartialEq for DefaultKeyedValues2D<R, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.row_keys.iter().eq(other.row_keys.iter())
            && self.column_keys.iter().eq(other.column_keys.iter())
            && self.data == other.data
    }
}

#[cfg(feature = "serde")]
pub(crate) mod serde_repr {
    use super::*;

    /// Wire shape of a 2D table, validated on the way in.
    #[derive(serde::Deserialize)]
    pub struct RawKeyedValues2D<R, C, T> {
        row_keys: Vec<R>,
        column_keys: Vec<C>,
        data: Vec<Vec<Option<T>>>,
    }

    impl<R: Key, C: Key, T> TryFrom<RawKeyedValues2D<R, C, T>> for DefaultKeyedValues2D<R, C, T> {
        type Error = DataError;

        fn try_from(raw: RawKeyedValues2D<R, C, T>) -> DataResult<Self> {
            let row_count = raw.row_keys.len();
            let column_count = raw.column_keys.len();
            let row_keys: IndexSet<R> = raw.row_keys.into_iter().collect();
            let column_keys: IndexSet<C> = raw.column_keys.into_iter().collect();
            if row_keys.len() != row_count || column_keys.len() != column_count {
                return Err(DataError::Malformed("duplicate keys".to_string()));
            }
            if raw.data.len() != row_count || raw.data.iter().any(|r| r.len() != column_count) {
                return Err(DataError::Malformed(format!(
                    "cell data does not match {}x{} keys",
                    row_count, column_count
                )));
            }
            Ok(Self {
                row_keys,
                column_keys,
                data: raw.data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table: DefaultKeyedValues2D<&str, &str, f64> = DefaultKeyedValues2D::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(matches!(
            table.value(0, 0),
            Err(DataError::IndexOutOfRange { axis: Axis::Row, .. })
        ));
    }

    #[test]
    fn test_set_value_widens_table() {
        let mut table = DefaultKeyedValues2D::new();
        table.set_value(Some(1), "R1", "C1");
        table.set_value(Some(2), "R2", "C2");

        assert_eq!(table.row_keys(), vec![&"R1", &"R2"]);
        assert_eq!(table.column_keys(), vec![&"C1", &"C2"]);
        assert_eq!(table.value(0, 0), Ok(Some(&1)));
        assert_eq!(table.value(0, 1), Ok(None));
        assert_eq!(table.value(1, 0), Ok(None));
        assert_eq!(table.value(1, 1), Ok(Some(&2)));
    }

    #[test]
    fn test_overwrite_and_clear() {
        let mut table = DefaultKeyedValues2D::new();
        table.set_value(Some(1.0), "R1", "C1");
        table.set_value(Some(3.0), "R1", "C1");
        assert_eq!(table.double_value(0, 0), Ok(3.0));

        table.set_value(None, "R1", "C1");
        assert_eq!(table.value(0, 0), Ok(None));
        assert!(table.double_value(0, 0).unwrap().is_nan());
        // Keys survive clearing.
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_with_keys_all_absent() {
        let table: DefaultKeyedValues2D<_, _, f64> =
            DefaultKeyedValues2D::with_keys(["A", "B", "A"], [1, 2, 3]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_key_lookup() {
        let mut table = DefaultKeyedValues2D::new();
        table.set_value(Some(5), "R1", "C1");

        assert_eq!(table.row_index(&"R1"), Some(0));
        assert_eq!(table.row_index(&"R2"), None);
        assert_eq!(table.column_key(0), Ok(&"C1"));
        assert!(matches!(
            table.column_key(1),
            Err(DataError::IndexOutOfRange { axis: Axis::Column, index: 1, len: 1 })
        ));
        assert!(matches!(
            table.value_by_key(&"R1", &"C9"),
            Err(DataError::KeyNotFound { axis: Axis::Column, .. })
        ));
    }

    #[test]
    fn test_value_mut() {
        let mut table = DefaultKeyedValues2D::new();
        table.set_value(Some(1), "R1", "C1");
        *table.value_mut(0, 0).unwrap() = Some(10);
        assert_eq!(table.value(0, 0), Ok(Some(&10)));
        assert!(table.value_mut(1, 0).is_err());
    }

    #[test]
    fn test_iter_row_major() {
        let mut table = DefaultKeyedValues2D::new();
        table.set_value(Some('a'), "R1", "C1");
        table.set_value(Some('c'), "R2", "C1");
        table.set_value(Some('b'), "R1", "C2");

        let cells: Vec<_> = table.iter().collect();
        assert_eq!(cells, vec![(0, 0, &'a'), (0, 1, &'b'), (1, 0, &'c')]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut a = DefaultKeyedValues2D::new();
        a.set_value(Some(1), "R1", "C1");
        a.set_value(Some(2), "R2", "C1");

        let mut b = DefaultKeyedValues2D::new();
        b.set_value(Some(2), "R2", "C1");
        b.set_value(Some(1), "R1", "C1");
        assert_ne!(a, b);

        let mut c = DefaultKeyedValues2D::new();
        c.set_value(Some(1), "R1", "C1");
        c.set_value(Some(2), "R2", "C1");
        assert_eq!(a, c);
    }
}
