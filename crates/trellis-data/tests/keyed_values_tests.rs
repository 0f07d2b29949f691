//! Behavioural tests for the 3D keyed table.
//!
//! These cover the congruence, round-trip and monotonic-axis guarantees that
//! chart renderers rely on when indexing every series through one grid.

use trellis_data::{
    Axis, DataError, DefaultKeyedValues3D, KeyedValues2D, KeyedValues3D, Values2D, Values3D,
};

type Table = DefaultKeyedValues3D<String, String, String, f64>;

fn key(s: &str) -> String {
    s.to_string()
}

fn set(table: &mut Table, value: Option<f64>, s: &str, r: &str, c: &str) {
    table.set_value(value, key(s), key(r), key(c));
}

fn assert_congruent(table: &Table) {
    for s in 0..table.series_count() {
        let slice = table.slice(s).unwrap();
        assert_eq!(slice.row_keys(), table.row_keys(), "rows of series {}", s);
        assert_eq!(slice.column_keys(), table.column_keys(), "columns of series {}", s);
        assert_eq!(slice.row_count(), table.row_count());
        assert_eq!(slice.column_count(), table.column_count());
    }
}

#[test]
fn test_single_value_scenario() {
    let mut table = Table::new();
    set(&mut table, Some(42.0), "S1", "R1", "C1");

    assert_eq!(table.series_count(), 1);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column_count(), 1);
    assert_eq!(table.value(0, 0, 0), Ok(Some(&42.0)));
}

#[test]
fn test_second_series_sees_earlier_rows() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    set(&mut table, Some(7.0), "S1", "R2", "C1");

    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.value_by_key(&key("S1"), &key("R1"), &key("C1")),
        Ok(Some(&1.0))
    );

    set(&mut table, Some(3.0), "S2", "R2", "C1");
    let s2 = table.slice(1).unwrap();
    assert_eq!(s2.row_keys(), vec![&key("R1"), &key("R2")]);
    assert_eq!(s2.value_by_key(&key("R1"), &key("C1")), Ok(None));
    assert_eq!(s2.value_by_key(&key("R2"), &key("C1")), Ok(Some(&3.0)));
}

#[test]
fn test_congruence_after_every_write() {
    let writes = [
        ("S1", "R1", "C1"),
        ("S2", "R2", "C1"),
        ("S1", "R3", "C2"),
        ("S3", "R1", "C3"),
        ("S2", "R4", "C4"),
        ("S1", "R1", "C1"),
    ];
    let mut table = Table::new();
    for (i, (s, r, c)) in writes.iter().enumerate() {
        set(&mut table, Some(i as f64), s, r, c);
        assert_congruent(&table);
    }
    assert_eq!(table.series_count(), 3);
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.column_count(), 4);
}

#[test]
fn test_round_trip_by_index_and_key() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    set(&mut table, Some(2.5), "S2", "R2", "C2");

    let (s, r, c) = (
        table.series_index(&key("S2")).unwrap(),
        table.row_index(&key("R2")).unwrap(),
        table.column_index(&key("C2")).unwrap(),
    );
    assert_eq!(table.value(s, r, c), Ok(Some(&2.5)));
    assert_eq!(
        table.double_value_by_key(&key("S2"), &key("R2"), &key("C2")),
        Ok(2.5)
    );
}

#[test]
fn test_axes_are_monotonic_and_stable() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    set(&mut table, Some(2.0), "S1", "R2", "C2");
    let rows_before: Vec<String> = table.row_keys().into_iter().cloned().collect();
    let r2_index = table.row_index(&key("R2"));

    set(&mut table, None, "S2", "R0", "C1");
    set(&mut table, None, "S1", "R2", "C2");

    let rows_after: Vec<String> = table.row_keys().into_iter().cloned().collect();
    assert_eq!(&rows_after[..rows_before.len()], &rows_before[..]);
    assert_eq!(rows_after.last(), Some(&key("R0")));
    assert_eq!(table.row_index(&key("R2")), r2_index);
}

#[test]
fn test_backfill_creates_absent_cells() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    set(&mut table, Some(2.0), "S2", "R1", "C1");
    set(&mut table, Some(3.0), "S3", "R1", "C1");

    set(&mut table, Some(9.0), "S1", "R2", "C1");

    let r2 = table.row_index(&key("R2")).unwrap();
    let absent = (0..table.series_count())
        .filter(|&s| table.value(s, r2, 0) == Ok(None))
        .count();
    assert_eq!(absent, 2);
    assert_eq!(table.value(0, r2, 0), Ok(Some(&9.0)));
}

#[test]
fn test_new_series_with_new_row_has_no_extra_absent_cells() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    set(&mut table, Some(2.0), "S2", "R2", "C1");

    let s2 = table.slice(1).unwrap();
    assert_eq!(s2.iter().count(), 1);
    assert_eq!(s2.value(1, 0), Ok(Some(&2.0)));
    assert_eq!(table.value(0, 1, 0), Ok(None));
}

#[test]
fn test_unknown_key_is_an_error() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");

    assert_eq!(
        table.value_by_key(&key("S9"), &key("R1"), &key("C1")),
        Err(DataError::KeyNotFound {
            axis: Axis::Series,
            key: "\"S9\"".to_string()
        })
    );
    assert!(matches!(
        table.value_by_key(&key("S1"), &key("R9"), &key("C1")),
        Err(DataError::KeyNotFound { axis: Axis::Row, .. })
    ));
    assert!(matches!(
        table.double_value_by_key(&key("S1"), &key("R1"), &key("C9")),
        Err(DataError::KeyNotFound { axis: Axis::Column, .. })
    ));
    assert_eq!(table.series_index(&key("S9")), None);
}

#[test]
fn test_index_errors() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");

    assert!(matches!(
        table.value(1, 0, 0),
        Err(DataError::IndexOutOfRange { axis: Axis::Series, index: 1, len: 1 })
    ));
    assert!(matches!(
        table.value(0, 0, 3),
        Err(DataError::IndexOutOfRange { axis: Axis::Column, .. })
    ));
    assert!(table.series_key(1).is_err());
    assert!(table.row_key(1).is_err());
    assert!(table.column_key(5).is_err());
    assert_eq!(table.series_key(0), Ok(&key("S1")));
}

#[test]
fn test_empty_table_has_no_axes() {
    // Axes are only ever populated together with the first slice, so an
    // empty table never has keys without slices.
    let table = Table::new();
    assert!(table.is_empty());
    assert_eq!(table.series_count(), 0);
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.column_count(), 0);
    assert!(table.slice(0).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    set(&mut table, Some(2.0), "S2", "R2", "C1");

    let json = serde_json::to_string(&table).unwrap();
    let restored: Table = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, table);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_incongruent_slices() {
    let json = r#"{
        "series_keys": ["S1"],
        "row_keys": ["R1", "R2"],
        "column_keys": ["C1"],
        "data": [{ "row_keys": ["R1"], "column_keys": ["C1"], "data": [[1.0]] }]
    }"#;
    assert!(serde_json::from_str::<Table>(json).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_axes_without_series() {
    let json = r#"{
        "series_keys": [],
        "row_keys": ["R0"],
        "column_keys": ["C0"],
        "data": []
    }"#;
    let err = serde_json::from_str::<Table>(json).unwrap_err();
    assert!(err.to_string().contains("without any series"), "{err}");

    let empty: Table =
        serde_json::from_str(r#"{"series_keys":[],"row_keys":[],"column_keys":[],"data":[]}"#)
            .unwrap();
    assert!(empty.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_duplicate_axis_keys() {
    let duplicate_rows = r#"{
        "series_keys": ["S1"],
        "row_keys": ["R", "R"],
        "column_keys": ["C"],
        "data": [{ "row_keys": ["R"], "column_keys": ["C"], "data": [[1.0]] }]
    }"#;
    assert!(serde_json::from_str::<Table>(duplicate_rows).is_err());

    let duplicate_columns = r#"{
        "series_keys": ["S1"],
        "row_keys": ["R"],
        "column_keys": ["C", "C"],
        "data": [{ "row_keys": ["R"], "column_keys": ["C"], "data": [[1.0]] }]
    }"#;
    assert!(serde_json::from_str::<Table>(duplicate_columns).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialized_table_accepts_further_writes() {
    let mut table = Table::new();
    set(&mut table, Some(1.0), "S1", "R1", "C1");
    let json = serde_json::to_string(&table).unwrap();

    let mut restored: Table = serde_json::from_str(&json).unwrap();
    set(&mut restored, Some(2.0), "S2", "R2", "C2");
    assert_congruent(&restored);
    assert_eq!(restored.value(1, 1, 1), Ok(Some(&2.0)));
    assert_eq!(restored.value(0, 1, 1), Ok(None));
}
