use super::PackageHistory;
use crate::Result;
use crate::model::{Granularity, Observation};
use chrono::{NaiveDate, NaiveTime};
use compact_str::{CompactString, ToCompactString, format_compact};
use ohno::IntoAppError;
use semver::Version;
use std::collections::{BTreeMap, HashMap};

const LOG_TARGET: &str = "   history";

/// Synchronous access to the current in-memory observation list for one
/// granularity of one package.
///
/// The pipeline treats the returned data as already fetched and already
/// validated; it performs no further checks on date normalization or count
/// non-negativity.
pub trait HistorySource {
    /// The package's observations for `granularity`, in display order.
    fn date_points(&self, granularity: Granularity) -> &[Observation];
}

/// Pre-bucketed download history for a single package.
///
/// Built once from a raw [`PackageHistory`] bundle; holds one densifiable
/// observation list per granularity. Within each list, buckets appear in
/// ascending order of the earliest version that produced them, and dates
/// ascend within each bucket, so first-discovery display order downstream
/// matches version order.
#[derive(Debug, Clone)]
pub struct History {
    package: CompactString,
    major: Vec<Observation>,
    patch: Vec<Observation>,
    prerelease: Vec<Observation>,
}

impl History {
    /// Bucket a raw history bundle for all granularities.
    ///
    /// Version strings that fail semver parsing are skipped, not fatal; the
    /// remaining rows still produce a usable history.
    #[must_use]
    pub fn new(history: &PackageHistory) -> Self {
        let result = Self {
            package: history.package.clone(),
            major: bucket_observations(history, Granularity::Major),
            patch: bucket_observations(history, Granularity::Patch),
            prerelease: bucket_observations(history, Granularity::Prerelease),
        };

        log::debug!(
            target: LOG_TARGET,
            "Bucketed {} raw rows for '{}' into {}/{}/{} major/patch/prerelease observations",
            history.rows.len(),
            result.package,
            result.major.len(),
            result.patch.len(),
            result.prerelease.len()
        );

        result
    }

    /// Parse a JSON stat bundle and bucket it.
    ///
    /// # Errors
    /// Returns an error if the JSON does not deserialize into a
    /// [`PackageHistory`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let history: PackageHistory = serde_json::from_str(json).into_app_err("Could not parse package history bundle")?;
        Ok(Self::new(&history))
    }

    /// The package identifier this history belongs to.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }
}

impl HistorySource for History {
    fn date_points(&self, granularity: Granularity) -> &[Observation] {
        match granularity {
            Granularity::Major => &self.major,
            Granularity::Patch => &self.patch,
            Granularity::Prerelease => &self.prerelease,
        }
    }
}

struct Bucket {
    first_version: Version,
    counts: BTreeMap<i64, f64>,
}

fn bucket_observations(history: &PackageHistory, granularity: Granularity) -> Vec<Observation> {
    let mut buckets: HashMap<CompactString, Bucket> = HashMap::new();

    for row in &history.rows {
        let Ok(version) = Version::parse(&row.version) else {
            log::debug!(
                target: LOG_TARGET,
                "Skipping unparseable version '{}' for package '{}'",
                row.version,
                history.package
            );
            continue;
        };

        let Some(label) = bucket_label(&version, granularity) else {
            continue;
        };

        let date = utc_midnight_millis(row.date);
        let bucket = buckets.entry(label).or_insert_with(|| Bucket {
            first_version: version.clone(),
            counts: BTreeMap::new(),
        });
        if version < bucket.first_version {
            bucket.first_version = version;
        }
        *bucket.counts.entry(date).or_insert(0.0) += row.downloads as f64;
    }

    let mut ordered: Vec<(CompactString, Bucket)> = buckets.into_iter().collect();
    ordered.sort_by(|a, b| a.1.first_version.cmp(&b.1.first_version));

    let mut points = Vec::new();
    for (label, bucket) in ordered {
        for (date, count) in bucket.counts {
            points.push(Observation::new(date, label.clone(), count));
        }
    }

    points
}

/// Label for the bucket `version` falls into, or `None` when the version does
/// not participate in `granularity`.
fn bucket_label(version: &Version, granularity: Granularity) -> Option<CompactString> {
    match granularity {
        // 0.x lines are distinct release lines by semver convention, so they
        // bucket per minor rather than collapsing into one "0" band.
        Granularity::Major => Some(if version.major == 0 {
            format_compact!("0.{}", version.minor)
        } else {
            version.major.to_compact_string()
        }),
        Granularity::Patch => Some(format_compact!("{}.{}.{}", version.major, version.minor, version.patch)),
        Granularity::Prerelease => {
            if version.pre.is_empty() {
                None
            } else {
                // Bucket by channel: the first dot-separated identifier of
                // the prerelease tag ("nightly", "rc", ...).
                let tag = version.pre.as_str().split('.').next().unwrap_or_default();
                Some(CompactString::new(tag))
            }
        }
    }
}

fn utc_midnight_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
