//! Per-package download history, bucketed by version granularity.
//!
//! # Implementation Model
//!
//! The raw upstream unit is the [`VersionDownloadRow`]: downloads of one
//! published version on one day. A [`PackageHistory`] bundles the complete
//! raw history for a single package, typically deserialized from a prepared
//! JSON stat bundle.
//!
//! [`History`] ingests a bundle once and pre-buckets it for all three
//! [`Granularity`](crate::model::Granularity) selections, summing duplicate
//! (date, bucket) pairs and converting dates to UTC-midnight millisecond
//! timestamps. The pipeline then pulls the already-bucketed observation list
//! through the [`HistorySource`] accessor; no further validation happens
//! downstream.

mod package_history;
mod store;

pub use package_history::{PackageHistory, VersionDownloadRow};
pub use store::{History, HistorySource};
