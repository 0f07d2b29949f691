//! Read-only table interfaces shared by chart datasets.

use crate::error::{Axis, DataError, DataResult};
use crate::key::{Key, NumericValue};

/// Index-addressed 2D table of optional values.
pub trait Values2D {
    type Value;

    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// The value at (`row`, `column`); `Ok(None)` means absent.
    fn value(&self, row: usize, column: usize) -> DataResult<Option<&Self::Value>>;

    /// Numeric view of [`value`](Self::value): NaN when absent.
    fn double_value(&self, row: usize, column: usize) -> DataResult<f64>
    where
        Self::Value: NumericValue,
    {
        Ok(self
            .value(row, column)?
            .map_or(f64::NAN, |v| (*v).to_f64()))
    }
}

/// A [`Values2D`] whose rows and columns are also addressed by key.
pub trait KeyedValues2D: Values2D {
    type RowKey: Key;
    type ColumnKey: Key;

    fn row_key(&self, index: usize) -> DataResult<&Self::RowKey>;

    fn column_key(&self, index: usize) -> DataResult<&Self::ColumnKey>;

    /// Position of `key` on the row axis, or `None` if it was never added.
    fn row_index(&self, key: &Self::RowKey) -> Option<usize>;

    /// Position of `key` on the column axis, or `None` if it was never added.
    fn column_index(&self, key: &Self::ColumnKey) -> Option<usize>;

    /// Row keys in insertion order.
    fn row_keys(&self) -> Vec<&Self::RowKey>;

    /// Column keys in insertion order.
    fn column_keys(&self) -> Vec<&Self::ColumnKey>;

    /// Key-addressed lookup.
    ///
    /// Unknown keys are an error ([`DataError::KeyNotFound`]), not absent.
    fn value_by_key(
        &self,
        row_key: &Self::RowKey,
        column_key: &Self::ColumnKey,
    ) -> DataResult<Option<&Self::Value>> {
        let row = self
            .row_index(row_key)
            .ok_or_else(|| DataError::key_not_found(Axis::Row, row_key))?;
        let column = self
            .column_index(column_key)
            .ok_or_else(|| DataError::key_not_found(Axis::Column, column_key))?;
        self.value(row, column)
    }

    fn double_value_by_key(
        &self,
        row_key: &Self::RowKey,
        column_key: &Self::ColumnKey,
    ) -> DataResult<f64>
    where
        Self::Value: NumericValue,
    {
        Ok(self
            .value_by_key(row_key, column_key)?
            .map_or(f64::NAN, |v| (*v).to_f64()))
    }
}

/// Index-addressed 3D table: one 2D slice per series.
pub trait Values3D {
    type Value;

    fn series_count(&self) -> usize;

    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// The value at (`series`, `row`, `column`); `Ok(None)` means absent.
    fn value(&self, series: usize, row: usize, column: usize)
    -> DataResult<Option<&Self::Value>>;

    /// Numeric view of [`value`](Self::value): NaN when absent.
    fn double_value(&self, series: usize, row: usize, column: usize) -> DataResult<f64>
    where
        Self::Value: NumericValue,
    {
        Ok(self
            .value(series, row, column)?
            .map_or(f64::NAN, |v| (*v).to_f64()))
    }
}

/// A [`Values3D`] addressed by series, row and column keys.
pub trait KeyedValues3D: Values3D {
    type SeriesKey: Key;
    type RowKey: Key;
    type ColumnKey: Key;

    fn series_key(&self, index: usize) -> DataResult<&Self::SeriesKey>;

    fn row_key(&self, index: usize) -> DataResult<&Self::RowKey>;

    fn column_key(&self, index: usize) -> DataResult<&Self::ColumnKey>;

    fn series_index(&self, key: &Self::SeriesKey) -> Option<usize>;

    fn row_index(&self, key: &Self::RowKey) -> Option<usize>;

    fn column_index(&self, key: &Self::ColumnKey) -> Option<usize>;

    fn series_keys(&self) -> Vec<&Self::SeriesKey>;

    fn row_keys(&self) -> Vec<&Self::RowKey>;

    fn column_keys(&self) -> Vec<&Self::ColumnKey>;

    /// Key-addressed lookup.
    ///
    /// Any unresolved key fails with [`DataError::KeyNotFound`] naming the
    /// first axis that did not resolve.
    fn value_by_key(
        &self,
        series_key: &Self::SeriesKey,
        row_key: &Self::RowKey,
        column_key: &Self::ColumnKey,
    ) -> DataResult<Option<&Self::Value>> {
        let series = self
            .series_index(series_key)
            .ok_or_else(|| DataError::key_not_found(Axis::Series, series_key))?;
        let row = self
            .row_index(row_key)
            .ok_or_else(|| DataError::key_not_found(Axis::Row, row_key))?;
        let column = self
            .column_index(column_key)
            .ok_or_else(|| DataError::key_not_found(Axis::Column, column_key))?;
        self.value(series, row, column)
    }

    fn double_value_by_key(
        &self,
        series_key: &Self::SeriesKey,
        row_key: &Self::RowKey,
        column_key: &Self::ColumnKey,
    ) -> DataResult<f64>
    where
        Self::Value: NumericValue,
    {
        Ok(self
            .value_by_key(series_key, row_key, column_key)?
            .map_or(f64::NAN, |v| (*v).to_f64()))
    }
}
