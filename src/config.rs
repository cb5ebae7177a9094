use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for the nearest-neighbour classifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NeighborsConfig {
    /// Number of neighbours consulted for the majority vote.
    pub n_neighbors: usize,
}

impl NeighborsConfig {
    pub fn new(n_neighbors: usize) -> Self {
        Self { n_neighbors }
    }
}

impl Default for NeighborsConfig {
    fn default() -> Self {
        Self { n_neighbors: 1 }
    }
}

/// Where the splitter reads each row's timestamp from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TimeSource {
    /// Use the table's row index as the time value.
    Index,
    /// Use the named column.
    Column(String),
}

impl Default for TimeSource {
    fn default() -> Self {
        TimeSource::Index
    }
}

impl FromStr for TimeSource {
    type Err = String;

    /// The literal `"index"` selects the row index; any other string is
    /// taken as a column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("index") {
            Ok(TimeSource::Index)
        } else if s.is_empty() {
            Err("time source must be 'index' or a column name".to_string())
        } else {
            Ok(TimeSource::Column(s.to_string()))
        }
    }
}
