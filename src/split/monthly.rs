//! Month-to-month cross-validation splitting.
//!
//! Rows are grouped by calendar month; every pair of chronologically
//! consecutive distinct months present in the data becomes one split, the
//! earlier month as train and the later as test. Months need not be
//! calendar-adjacent: with March absent, February pairs directly with
//! April.
use chrono::{Datelike, NaiveDateTime};

use crate::config::TimeSource;
use crate::error::{Result, TimefoldError};
use crate::split::splitter_trait::CrossValidator;
use crate::table::{Table, Value};

/// One train/test pair of row identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Vec<Value>,
    pub test: Vec<Value>,
}

/// Cross-validation splitter pairing each calendar month with the next.
#[derive(Debug, Clone, Default)]
pub struct MonthlySplitter {
    time_source: TimeSource,
}

impl MonthlySplitter {
    pub fn new(time_source: TimeSource) -> Self {
        Self { time_source }
    }

    /// Split on the table's row index.
    pub fn by_index() -> Self {
        Self::new(TimeSource::Index)
    }

    /// Split on the named timestamp column.
    pub fn by_column(name: impl Into<String>) -> Self {
        Self::new(TimeSource::Column(name.into()))
    }

    /// Extract one timestamp per row from the configured time source.
    fn resolve_time_values(&self, table: &Table) -> Result<Vec<NaiveDateTime>> {
        let values: &[Value] = match &self.time_source {
            TimeSource::Index => table.index(),
            TimeSource::Column(name) => table.column(name).ok_or_else(|| {
                TimefoldError::Config(format!("column '{}' not found in table", name))
            })?,
        };

        values
            .iter()
            .map(|value| {
                value.as_timestamp().ok_or_else(|| {
                    TimefoldError::Config(format!(
                        "time value '{}' is not convertible to a timestamp",
                        value
                    ))
                })
            })
            .collect()
    }
}

impl CrossValidator for MonthlySplitter {
    type Splits = MonthlySplits;

    /// Number of whole calendar-month boundaries between the earliest and
    /// latest timestamp, floored at zero.
    ///
    /// This counts boundaries between the extremes, not distinct months
    /// present, so with month gaps it can differ from the number of pairs
    /// `split` actually yields.
    fn get_n_splits(&self, table: &Table) -> Result<usize> {
        let times = self.resolve_time_values(table)?;
        let (first, last) = match (times.iter().min(), times.iter().max()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(0),
        };
        let total_months = (last.year() - first.year()) * 12 + last.month() as i32
            - first.month() as i32;
        Ok(total_months.max(0) as usize)
    }

    fn split(&self, table: &Table) -> Result<MonthlySplits> {
        let times = self.resolve_time_values(table)?;

        let mut order: Vec<usize> = (0..times.len()).collect();
        order.sort_by_key(|&i| times[i]);

        // Chronological month groups; stable sort keeps equal-time rows in
        // table order within each group.
        let mut groups: Vec<(MonthKey, Vec<Value>)> = Vec::new();
        for &row in &order {
            let key = month_key(&times[row]);
            let id = table.index()[row].clone();
            if groups.last().map(|(last_key, _)| *last_key) != Some(key) {
                groups.push((key, Vec::new()));
            }
            if let Some((_, ids)) = groups.last_mut() {
                ids.push(id);
            }
        }

        log::debug!(
            "grouped {} rows into {} distinct months",
            times.len(),
            groups.len()
        );
        Ok(MonthlySplits {
            groups: groups.into_iter().map(|(_, ids)| ids).collect(),
            cursor: 0,
        })
    }
}

/// (year, month) pair identifying a calendar month.
type MonthKey = (i32, u32);

fn month_key(ts: &NaiveDateTime) -> MonthKey {
    (ts.year(), ts.month())
}

/// Finite iterator over the train/test pairs of one `split` call.
#[derive(Debug, Clone)]
pub struct MonthlySplits {
    groups: Vec<Vec<Value>>,
    cursor: usize,
}

impl Iterator for MonthlySplits {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        if self.cursor + 1 >= self.groups.len() {
            return None;
        }
        let split = Split {
            train: self.groups[self.cursor].clone(),
            test: self.groups[self.cursor + 1].clone(),
        };
        self.cursor += 1;
        Some(split)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pairs = self.groups.len().saturating_sub(1);
        let remaining = pairs.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthlySplits {}
