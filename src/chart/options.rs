use crate::model::{Granularity, Measure};
use serde::{Deserialize, Serialize};

/// Default ranking window, in days.
const fn default_window_days() -> u32 {
    30
}

/// Display parameters for one chart.
///
/// All fields have sensible defaults, so a deserialized options block only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartOptions {
    /// Which version buckets to chart.
    #[serde(default)]
    pub granularity: Granularity,

    /// Upper bound on the number of series shown at once, keeping the most
    /// downloaded within the ranking window. `None` shows every series.
    #[serde(default)]
    pub max_versions_shown: Option<usize>,

    /// Trailing window, in days, used to rank series relevance. Measured back
    /// from the latest observed date.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// How counts are presented on the value axis.
    #[serde(default)]
    pub measure: Measure,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            max_versions_shown: None,
            window_days: default_window_days(),
            measure: Measure::default(),
        }
    }
}
