//! Integration tests for the table type and configuration types.

use timefold::config::{NeighborsConfig, TimeSource};
use timefold::table::{Table, Value};

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

#[test]
fn table_new_valid() {
    let index = vec![Value::Int(0), Value::Int(1)];
    let columns = vec![(
        "price".to_string(),
        vec![Value::Float(9.5), Value::Float(10.25)],
    )];
    let table = Table::new(index, columns).unwrap();
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["price"]);
}

#[test]
fn table_rejects_misaligned_column() {
    let index = vec![Value::Int(0), Value::Int(1)];
    let columns = vec![("price".to_string(), vec![Value::Float(9.5)])];
    assert!(Table::new(index, columns).is_err());
}

#[test]
fn table_rejects_duplicate_column_names() {
    let index = vec![Value::Int(0)];
    let columns = vec![
        ("price".to_string(), vec![Value::Float(9.5)]),
        ("price".to_string(), vec![Value::Float(1.0)]),
    ];
    assert!(Table::new(index, columns).is_err());
}

#[test]
fn default_index_numbers_rows() {
    let table = Table::with_default_index(vec![(
        "a".to_string(),
        vec![Value::Int(5), Value::Int(6), Value::Int(7)],
    )])
    .unwrap();
    assert_eq!(
        table.index(),
        &[Value::Int(0), Value::Int(1), Value::Int(2)]
    );
}

#[test]
fn missing_column_lookup_is_none() {
    let table = Table::with_default_index(vec![("a".to_string(), vec![Value::Int(1)])]).unwrap();
    assert!(table.column("b").is_none());
}

// ---------------------------------------------------------------------------
// Value timestamp conversion
// ---------------------------------------------------------------------------

#[test]
fn value_conversions() {
    assert!(Value::from("2021-06-01").as_timestamp().is_some());
    assert!(Value::from("2021/06/01").as_timestamp().is_some());
    assert!(Value::from("2021-06-01T12:00:00").as_timestamp().is_some());
    assert!(Value::Int(1_600_000_000).as_timestamp().is_some());
    assert!(Value::from("june first").as_timestamp().is_none());
    assert!(Value::Float(0.5).as_timestamp().is_none());
}

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

#[test]
fn neighbors_config_defaults_to_one() {
    assert_eq!(NeighborsConfig::default().n_neighbors, 1);
}

#[test]
fn neighbors_config_round_trips_json() {
    let config = NeighborsConfig::new(3);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("n_neighbors"));
    let back: NeighborsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn time_source_defaults_to_index() {
    assert_eq!(TimeSource::default(), TimeSource::Index);
}

#[test]
fn time_source_from_str_index_sentinel() {
    let source: TimeSource = "index".parse().unwrap();
    assert_eq!(source, TimeSource::Index);
    let source: TimeSource = "Index".parse().unwrap();
    assert_eq!(source, TimeSource::Index);
}

#[test]
fn time_source_from_str_column_name() {
    let source: TimeSource = "recorded_at".parse().unwrap();
    assert_eq!(source, TimeSource::Column("recorded_at".to_string()));
}

#[test]
fn time_source_from_str_empty_errors() {
    let result: Result<TimeSource, _> = "".parse();
    assert!(result.is_err());
}

#[test]
fn time_source_round_trips_json() {
    let source = TimeSource::Column("date".to_string());
    let json = serde_json::to_string(&source).unwrap();
    let back: TimeSource = serde_json::from_str(&json).unwrap();
    assert_eq!(back, source);
}
