//! The six eligibility criteria

use serde::{Deserialize, Serialize};

/// One independent eligibility criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Startup stage
    StartupStage,
    /// Industry
    Industry,
    /// Annual revenue band
    AnnualRevenue,
    /// Head-count band
    EmployeeRange,
    /// Location
    Location,
    /// Existing government support
    ExistingSupport,
}

impl Criterion {
    /// All criteria in breakdown order
    pub const ALL: [Self; 6] = [
        Self::StartupStage,
        Self::Industry,
        Self::AnnualRevenue,
        Self::EmployeeRange,
        Self::Location,
        Self::ExistingSupport,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartupStage => "Startup stage",
            Self::Industry => "Industry",
            Self::AnnualRevenue => "Revenue",
            Self::EmployeeRange => "Employee count",
            Self::Location => "Location",
            Self::ExistingSupport => "Existing support",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
