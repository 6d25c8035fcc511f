use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One (date, series, count) download data point.
///
/// The date is a millisecond timestamp since the Unix epoch, normalized to
/// UTC midnight by the upstream source. The count is a raw download tally, or
/// a fractional share of the per-date total after percentage normalization.
///
/// The pair (date, series) is the natural grouping key. Duplicate pairs are
/// legal in raw input and must be summed wherever aggregation occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Milliseconds since the Unix epoch, at UTC midnight.
    pub date: i64,

    /// Label of the version bucket this point belongs to.
    pub series: CompactString,

    /// Non-negative download count or fractional share.
    pub count: f64,
}

impl Observation {
    #[must_use]
    pub fn new(date: i64, series: impl Into<CompactString>, count: f64) -> Self {
        Self {
            date,
            series: series.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let point = Observation::new(86_400_000, "1", 42.0);
        assert_eq!(point.date, 86_400_000);
        assert_eq!(point.series, "1");
        assert!((point.count - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let original = Observation::new(0, "2.1", 7.5);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
