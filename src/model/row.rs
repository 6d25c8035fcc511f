use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pivoted chart row: a date plus one value per displayed series.
///
/// Values are present only for series selected for display, and every
/// selected series appears for every date in the output (zero-filled where
/// the source had no observation).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    /// Milliseconds since the Unix epoch, at UTC midnight.
    pub date: i64,

    /// Count or share per series label.
    pub values: BTreeMap<CompactString, f64>,
}

impl Row {
    #[must_use]
    pub const fn new(date: i64) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }
}
