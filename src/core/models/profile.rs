//! Profile model
//!
//! The subset of a stored user record that eligibility matching reads.
//! Field names follow the persisted document shape, including the legacy
//! duplicated fields (`industry`/`industryType`, `location`/`registeredLocation`).

use serde::{Deserialize, Deserializer, Serialize};

use super::EmployeeBand;

/// Kind of account a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A startup looking for funding and schemes
    Startup,
    /// An investor
    Investor,
    /// Any other stored value
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Startup => write!(f, "startup"),
            Self::Investor => write!(f, "investor"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A user profile as read from the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Document identifier
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Account kind; only startups are ever eligible
    pub user_type: UserType,

    /// Free-form stage label ("Idea", "Early Stage", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_stage: Option<String>,

    /// Industry label (current field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Industry label (legacy field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_type: Option<String>,

    /// Revenue band label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<String>,

    /// Head count, `None` when the stored value is missing or unusable
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_employees: Option<u64>,

    /// Location label (current field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Location label (legacy field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_location: Option<String>,

    /// "Yes" / "No"; stored booleans are read as the matching answer
    #[serde(
        default,
        deserialize_with = "lenient_answer",
        skip_serializing_if = "Option::is_none"
    )]
    pub existing_government_support: Option<String>,
}

impl Profile {
    /// Create a bare profile with every optional field unset
    #[must_use]
    pub fn new(id: impl Into<String>, user_type: UserType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            user_type,
            startup_stage: None,
            industry: None,
            industry_type: None,
            annual_revenue: None,
            number_of_employees: None,
            location: None,
            registered_location: None,
            existing_government_support: None,
        }
    }

    /// Whether this profile can be eligible for schemes at all
    #[must_use]
    pub fn is_startup(&self) -> bool {
        self.user_type == UserType::Startup
    }

    /// Effective industry: `industry` when set and non-empty, else `industryType`
    #[must_use]
    pub fn effective_industry(&self) -> Option<&str> {
        first_present(self.industry.as_deref(), self.industry_type.as_deref())
    }

    /// Effective location: `location` when set and non-empty, else `registeredLocation`
    #[must_use]
    pub fn effective_location(&self) -> Option<&str> {
        first_present(self.location.as_deref(), self.registered_location.as_deref())
    }

    /// Whether the profile reports existing government support
    #[must_use]
    pub fn has_existing_support(&self) -> bool {
        self.existing_government_support.as_deref() == Some("Yes")
    }

    /// Head-count band, if the count is usable
    #[must_use]
    pub fn employee_band(&self) -> Option<EmployeeBand> {
        self.number_of_employees.map(EmployeeBand::from_count)
    }
}

fn first_present<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    primary.filter(|v| !v.is_empty()).or(fallback)
}

/// Accept "Yes"/"No" strings and booleans; anything else is `None`
fn lenient_answer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Bool(b)) => Some(if b { "Yes" } else { "No" }.to_string()),
        _ => None,
    })
}

/// Accept integers, non-negative floats and numeric strings; anything else is `None`
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_count))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_count(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        },
        _ => None,
    }
}
