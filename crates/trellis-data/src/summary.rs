//! Aggregate queries over 3D datasets, used by axes to size themselves.

use crate::error::{Axis, DataError, DataResult};
use crate::key::NumericValue;
use crate::traits::Values3D;
use trellis_core::profiling::profile_function;

/// Closed interval of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Range spanning `a` and `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Smallest range covering both `self` and `value`.
    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Every present, non-NaN value in series/row/column order.
fn present_values<D>(data: &D) -> impl Iterator<Item = f64> + '_
where
    D: Values3D + ?Sized,
    D::Value: NumericValue,
{
    let rows = data.row_count();
    let columns = data.column_count();
    (0..data.series_count())
        .flat_map(move |s| (0..rows).flat_map(move |r| (0..columns).map(move |c| (s, r, c))))
        .filter_map(move |(s, r, c)| data.double_value(s, r, c).ok())
        .filter(|v| !v.is_nan())
}

/// Range of all present values, or `None` when nothing is present.
pub fn find_value_range<D>(data: &D) -> Option<ValueRange>
where
    D: Values3D + ?Sized,
    D::Value: NumericValue,
{
    profile_function!();
    let mut values = present_values(data);
    let first = values.next()?;
    Some(values.fold(ValueRange::new(first, first), ValueRange::include))
}

/// Sum of all present values.
pub fn total<D>(data: &D) -> f64
where
    D: Values3D + ?Sized,
    D::Value: NumericValue,
{
    present_values(data).sum()
}

/// Number of present, non-NaN cells.
pub fn count<D>(data: &D) -> usize
where
    D: Values3D + ?Sized,
    D::Value: NumericValue,
{
    present_values(data).count()
}

/// Sum of the present values in one series.
pub fn series_total<D>(data: &D, series: usize) -> DataResult<f64>
where
    D: Values3D + ?Sized,
    D::Value: NumericValue,
{
    DataError::check_index(Axis::Series, series, data.series_count())?;
    let mut sum = 0.0;
    for row in 0..data.row_count() {
        for column in 0..data.column_count() {
            let v = data.double_value(series, row, column)?;
            if !v.is_nan() {
                sum += v;
            }
        }
    }
    Ok(sum)
}
