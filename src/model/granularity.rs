//! Version granularity type.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which version buckets to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Granularity {
    /// One series per major version line.
    #[default]
    Major,

    /// One series per exact patch release.
    Patch,

    /// One series per prerelease channel.
    Prerelease,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn test_default() {
        assert_eq!(Granularity::default(), Granularity::Major);
    }

    #[test]
    fn test_display() {
        assert_eq!(Granularity::Major.to_string(), "major");
        assert_eq!(Granularity::Patch.to_string(), "patch");
        assert_eq!(Granularity::Prerelease.to_string(), "prerelease");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Granularity::from_str("major").unwrap(), Granularity::Major);
        assert_eq!(Granularity::from_str("patch").unwrap(), Granularity::Patch);
        assert_eq!(Granularity::from_str("prerelease").unwrap(), Granularity::Prerelease);
        assert!(Granularity::from_str("minor").is_err());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Granularity::Prerelease).unwrap();
        assert_eq!(json, r#""prerelease""#);
    }

    #[test]
    fn test_deserialize() {
        let granularity: Granularity = serde_json::from_str(r#""patch""#).unwrap();
        assert_eq!(granularity, Granularity::Patch);
    }
}
