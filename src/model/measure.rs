//! Measurement transform type.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How counts are presented on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Measure {
    /// Raw download counts.
    #[default]
    TotalDownloads,

    /// Each count rescaled to its share of the per-date total.
    Percentage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Measure::default(), Measure::TotalDownloads);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Measure::TotalDownloads).unwrap();
        assert_eq!(json, r#""total_downloads""#);
    }

    #[test]
    fn test_deserialize() {
        let measure: Measure = serde_json::from_str(r#""percentage""#).unwrap();
        assert_eq!(measure, Measure::Percentage);
    }
}
