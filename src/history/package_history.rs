use chrono::NaiveDate;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Downloads of a single published version on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDownloadRow {
    /// Version string as published (semver text).
    pub version: CompactString,

    /// Calendar day the downloads were recorded for.
    pub date: NaiveDate,

    /// Download count for that version on that day.
    pub downloads: u64,
}

/// The complete raw daily download history of one package.
///
/// This is the wire shape of the prepared stat bundles the chart consumes.
/// Rows carry no ordering guarantee and may repeat (version, date) pairs;
/// aggregation downstream sums such duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageHistory {
    /// Package identifier the rows belong to.
    pub package: CompactString,

    /// Raw per-version daily rows, in no particular order.
    pub rows: Vec<VersionDownloadRow>,
}
