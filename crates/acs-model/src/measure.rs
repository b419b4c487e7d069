use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which statistical quantity a variable represents within its family.
///
/// Variant order matches the lexicographic order of the canonical names, so
/// ordered collections keyed by `Measure` iterate in sorted-by-name order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Estimate,
    EstimateAnnotation,
    Moe,
    MoeAnnotation,
    PercentEstimate,
    PercentEstimateAnnotation,
    PercentMoe,
    PercentMoeAnnotation,
}

impl Measure {
    /// All measures, in canonical-name order.
    pub const ALL: [Measure; 8] = [
        Measure::Estimate,
        Measure::EstimateAnnotation,
        Measure::Moe,
        Measure::MoeAnnotation,
        Measure::PercentEstimate,
        Measure::PercentEstimateAnnotation,
        Measure::PercentMoe,
        Measure::PercentMoeAnnotation,
    ];

    /// Resolve an ACS code suffix (`E`, `M`, `PE`, ...) to its measure.
    /// Matching is case-sensitive; unknown suffixes return `None`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "E" => Some(Measure::Estimate),
            "M" => Some(Measure::Moe),
            "PE" => Some(Measure::PercentEstimate),
            "PM" => Some(Measure::PercentMoe),
            "EA" => Some(Measure::EstimateAnnotation),
            "MA" => Some(Measure::MoeAnnotation),
            "PEA" => Some(Measure::PercentEstimateAnnotation),
            "PMA" => Some(Measure::PercentMoeAnnotation),
            _ => None,
        }
    }

    /// The code suffix this measure is encoded as.
    pub fn suffix(&self) -> &'static str {
        match self {
            Measure::Estimate => "E",
            Measure::Moe => "M",
            Measure::PercentEstimate => "PE",
            Measure::PercentMoe => "PM",
            Measure::EstimateAnnotation => "EA",
            Measure::MoeAnnotation => "MA",
            Measure::PercentEstimateAnnotation => "PEA",
            Measure::PercentMoeAnnotation => "PMA",
        }
    }

    /// The canonical measure name used in output documents and lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Estimate => "estimate",
            Measure::Moe => "moe",
            Measure::PercentEstimate => "percent_estimate",
            Measure::PercentMoe => "percent_moe",
            Measure::EstimateAnnotation => "estimate_annotation",
            Measure::MoeAnnotation => "moe_annotation",
            Measure::PercentEstimateAnnotation => "percent_estimate_annotation",
            Measure::PercentMoeAnnotation => "percent_moe_annotation",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Measure {
    type Err = String;

    /// Parse a canonical measure name (e.g. `percent_moe`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown measure name: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_round_trip() {
        for measure in Measure::ALL {
            assert_eq!(Measure::from_suffix(measure.suffix()), Some(measure));
        }
        assert_eq!(Measure::from_suffix("X"), None);
        assert_eq!(Measure::from_suffix("e"), None);
    }

    #[test]
    fn variant_order_matches_name_order() {
        // BTreeMap<Measure, _> iteration must equal sorted-by-name emission.
        let names: Vec<&str> = Measure::ALL.iter().map(|m| m.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Measure::PercentMoe).expect("serialize measure");
        assert_eq!(json, "\"percent_moe\"");
        let back: Measure = serde_json::from_str("\"moe_annotation\"").expect("deserialize");
        assert_eq!(back, Measure::MoeAnnotation);
    }

    #[test]
    fn parses_canonical_names() {
        assert_eq!(
            "percent_estimate_annotation".parse::<Measure>(),
            Ok(Measure::PercentEstimateAnnotation)
        );
        assert!("Estimate".parse::<Measure>().is_err());
    }
}
