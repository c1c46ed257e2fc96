//! Employee head-count bands
//!
//! Scheme rules list allowed bands by label. A profile's head count is
//! bucketed into exactly one band before comparison.

use serde::{Deserialize, Serialize};

/// Fixed head-count bands used by every scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeeBand {
    /// Up to 5 people
    #[serde(rename = "1-5")]
    UpToFive,
    /// 6 to 20 people
    #[serde(rename = "6-20")]
    UpToTwenty,
    /// 21 to 50 people
    #[serde(rename = "21-50")]
    UpToFifty,
    /// 51 to 100 people
    #[serde(rename = "51-100")]
    UpToHundred,
    /// More than 100 people
    #[serde(rename = "More than 100")]
    MoreThanHundred,
}

impl EmployeeBand {
    /// All bands in ascending order
    pub const ALL: [Self; 5] = [
        Self::UpToFive,
        Self::UpToTwenty,
        Self::UpToFifty,
        Self::UpToHundred,
        Self::MoreThanHundred,
    ];

    /// Bucket a head count
    #[must_use]
    pub const fn from_count(count: u64) -> Self {
        match count {
            0..=5 => Self::UpToFive,
            6..=20 => Self::UpToTwenty,
            21..=50 => Self::UpToFifty,
            51..=100 => Self::UpToHundred,
            _ => Self::MoreThanHundred,
        }
    }

    /// Label as stored in scheme rules
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToFive => "1-5",
            Self::UpToTwenty => "6-20",
            Self::UpToFifty => "21-50",
            Self::UpToHundred => "51-100",
            Self::MoreThanHundred => "More than 100",
        }
    }
}

impl std::fmt::Display for EmployeeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EmployeeBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| band.label() == s)
            .ok_or_else(|| format!("Unknown employee range: {s}"))
    }
}
