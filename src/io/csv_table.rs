//! CSV reader producing a `Table`.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::table::{Table, Value};

/// Configuration for reading delimited files into a `Table`.
#[derive(Debug, Clone)]
pub struct CsvTableConfig {
    /// Column to use as the row index. When `None`, rows are numbered 0..n.
    pub index_column: Option<String>,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for CsvTableConfig {
    fn default() -> Self {
        Self {
            index_column: None,
            delimiter: b',',
        }
    }
}

/// Read a comma-separated file with a header row into a `Table`.
pub fn read_csv_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_csv_table_with_config(path, &CsvTableConfig::default())
}

/// Read a delimited file into a `Table` using a custom configuration.
///
/// Each column's type is inferred from its values: integer, then float,
/// then timestamp, falling back to string.
pub fn read_csv_table_with_config<P: AsRef<Path>>(
    path: P,
    config: &CsvTableConfig,
) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open CSV file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();

    let index_idx = match &config.index_column {
        Some(name) => Some(
            find_column(&headers, name)
                .ok_or_else(|| anyhow!("Missing index column '{}'", name))?,
        ),
        None => None,
    };

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        if record.len() != headers.len() {
            return Err(anyhow!(
                "Row {} has {} fields but the header has {}",
                row_idx + 1,
                record.len(),
                headers.len()
            ));
        }
        for (col, field) in record.iter().enumerate() {
            cells[col].push(field.trim().to_string());
        }
    }

    let n_rows = cells.first().map(|col| col.len()).unwrap_or(0);

    let mut columns = Vec::new();
    let mut index = None;
    for (col, header) in headers.iter().enumerate() {
        let values = infer_column(&cells[col]);
        if Some(col) == index_idx {
            index = Some(values);
        } else {
            columns.push((header.to_string(), values));
        }
    }

    let index = index.unwrap_or_else(|| (0..n_rows as i64).map(Value::Int).collect());
    Table::new(index, columns).context("Failed to assemble table from CSV")
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}

/// Pick the narrowest type every value of a column fits.
fn infer_column(raw: &[String]) -> Vec<Value> {
    if raw.iter().all(|s| s.parse::<i64>().is_ok()) {
        return raw
            .iter()
            .map(|s| Value::Int(s.parse().unwrap_or_default()))
            .collect();
    }
    if raw.iter().all(|s| s.parse::<f64>().is_ok()) {
        return raw
            .iter()
            .map(|s| Value::Float(s.parse().unwrap_or_default()))
            .collect();
    }
    if let Some(timestamps) = parse_all_timestamps(raw) {
        return timestamps;
    }
    raw.iter().map(|s| Value::Str(s.clone())).collect()
}

fn parse_all_timestamps(raw: &[String]) -> Option<Vec<Value>> {
    if raw.is_empty() {
        return None;
    }
    let mut values = Vec::with_capacity(raw.len());
    for s in raw {
        let ts = Value::Str(s.clone()).as_timestamp()?;
        values.push(Value::Timestamp(ts));
    }
    Some(values)
}
