//! Row-indexed columnar table used as splitter input.
//!
//! `Table` is a small struct-of-vectors container: a row index carrying each
//! row's identity plus named columns of `Value` cells, all row-aligned. The
//! constructor validates alignment so downstream code can assume a
//! well-formed table.
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, TimefoldError};

/// A single cell: either a row label or a column entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Timestamp(NaiveDateTime),
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

impl Value {
    /// Convert to a timestamp, if this value admits one.
    ///
    /// Integers are interpreted as Unix epoch seconds; strings are parsed
    /// against a small set of common date and datetime formats (date-only
    /// forms take midnight). Floats are never convertible.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            Value::Int(secs) => DateTime::from_timestamp(*secs, 0).map(|dt| dt.naive_utc()),
            Value::Str(s) => parse_timestamp(s.trim()),
            Value::Float(_) => None,
        }
    }
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::Timestamp(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(value)
    }
}

/// A row-indexed table of named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Vec<Value>,
    columns: Vec<(String, Vec<Value>)>,
}

impl Table {
    /// Build a table from an index and named columns.
    ///
    /// Every column must be exactly as long as the index and column names
    /// must be unique.
    pub fn new(index: Vec<Value>, columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        for (name, values) in &columns {
            if values.len() != index.len() {
                return Err(TimefoldError::Validation(format!(
                    "column '{}' has {} rows but the index has {}",
                    name,
                    values.len(),
                    index.len()
                )));
            }
        }
        for (i, (name, _)) in columns.iter().enumerate() {
            if columns[..i].iter().any(|(other, _)| other == name) {
                return Err(TimefoldError::Validation(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }
        Ok(Table { index, columns })
    }

    /// Build a table with a default integer index 0..n.
    pub fn with_default_index(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let n_rows = columns.first().map(|(_, values)| values.len()).unwrap_or(0);
        let index = (0..n_rows as i64).map(Value::Int).collect();
        Table::new(index, columns)
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The row identifiers, in table order.
    pub fn index(&self) -> &[Value] {
        &self.index
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}
