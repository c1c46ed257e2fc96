//! Government scheme model
//!
//! A scheme carries display metadata plus one eligibility rule set of six
//! independent criteria. Empty lists and a `null` support flag impose no
//! constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Eligibility criteria attached to a scheme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRule {
    /// Allowed startup stage labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub startup_stages: Vec<String>,

    /// Allowed industry labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry_types: Vec<String>,

    /// Allowed revenue band labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub annual_revenue: Vec<String>,

    /// Allowed head-count band labels ("1-5", "More than 100", ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub employee_ranges: Vec<String>,

    /// Allowed location labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<String>,

    /// Required support status; `None` means "doesn't matter"
    #[serde(default)]
    pub existing_support: Option<bool>,
}

impl EligibilityRule {
    /// Whether no criterion constrains anything
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.startup_stages.is_empty()
            && self.industry_types.is_empty()
            && self.annual_revenue.is_empty()
            && self.employee_ranges.is_empty()
            && self.locations.is_empty()
            && self.existing_support.is_none()
    }
}

/// A stored government scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    /// Document identifier
    #[serde(alias = "_id")]
    pub id: String,

    /// Scheme name
    pub name: String,

    /// What the scheme offers
    pub description: String,

    /// Administering ministry or department
    pub ministry: String,

    /// Human-readable funding amount ("Up to ₹20 Lakhs")
    pub funding_amount: String,

    /// Eligibility criteria
    #[serde(default, deserialize_with = "null_as_default")]
    pub eligibility: EligibilityRule,

    /// Where to apply
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_link: String,

    /// Intended audience
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_audience: String,

    /// When the scheme was added
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Scheme fields supplied by a caller before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewScheme {
    /// Scheme name
    pub name: String,
    /// What the scheme offers
    pub description: String,
    /// Administering ministry or department
    pub ministry: String,
    /// Human-readable funding amount
    pub funding_amount: String,
    /// Eligibility criteria
    #[serde(deserialize_with = "null_as_default")]
    pub eligibility: EligibilityRule,
    /// Where to apply
    pub application_link: String,
    /// Intended audience
    pub target_audience: String,
}

impl NewScheme {
    /// Names of required fields that are blank
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("ministry", &self.ministry),
            ("fundingAmount", &self.funding_amount),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    /// Materialize into a stored scheme
    #[must_use]
    pub fn into_scheme(self, id: String, created_at: DateTime<Utc>) -> Scheme {
        Scheme {
            id,
            name: self.name,
            description: self.description,
            ministry: self.ministry,
            funding_amount: self.funding_amount,
            eligibility: self.eligibility,
            application_link: self.application_link,
            target_audience: self.target_audience,
            created_at,
        }
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Next sequential scheme id (`SCH-<n>`) given the ids already in use
#[must_use]
pub fn next_scheme_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let max_num = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix("SCH-").and_then(|n| n.parse::<u32>().ok()))
        .max()
        .unwrap_or(0);
    format!("SCH-{}", max_num + 1)
}
