//! Eligibility matcher service - scores a profile against scheme criteria
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Each of the six criteria is evaluated independently. A criterion with an
//! empty label list (or a `null` support flag) imposes no constraint and
//! always counts as a match. A profile is eligible when at least
//! [`MatchPolicy::required_matches`] criteria match.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::models::{Criterion, EligibilityRule, EmployeeBand, Profile, Scheme};

/// Number of criteria every rule set carries
pub const CRITERIA_COUNT: usize = Criterion::ALL.len();

/// Default number of matching criteria needed for eligibility
pub const DEFAULT_REQUIRED_MATCHES: usize = 3;

/// Eligibility threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPolicy {
    /// Minimum number of matching criteria (1..=6)
    pub required_matches: usize,
}

impl MatchPolicy {
    /// Create a policy, rejecting thresholds outside `1..=6`
    pub fn new(required_matches: usize) -> Result<Self, String> {
        if (1..=CRITERIA_COUNT).contains(&required_matches) {
            Ok(Self { required_matches })
        } else {
            Err(format!(
                "required matches must be between 1 and {CRITERIA_COUNT}, got {required_matches}"
            ))
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            required_matches: DEFAULT_REQUIRED_MATCHES,
        }
    }
}

/// What a criterion required of the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Requirement {
    /// One of these labels (empty = anything)
    AnyOf(Vec<String>),
    /// This support status (`None` = anything)
    Support(Option<bool>),
}

impl Requirement {
    /// Whether the requirement accepts any profile
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        match self {
            Self::AnyOf(labels) => labels.is_empty(),
            Self::Support(flag) => flag.is_none(),
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnyOf(labels) if labels.is_empty() => write!(f, "any"),
            Self::AnyOf(labels) => write!(f, "one of [{}]", labels.join(", ")),
            Self::Support(None) => write!(f, "any"),
            Self::Support(Some(flag)) => write!(f, "{flag}"),
        }
    }
}

/// Verdict for a single criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDetail {
    /// Which criterion
    pub criterion: Criterion,
    /// Whether it matched
    pub matched: bool,
    /// Effective profile value that was compared
    pub profile_value: Option<String>,
    /// What the scheme required
    pub required: Requirement,
}

/// Result of evaluating one profile against one rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Final verdict
    pub eligible: bool,
    /// Number of matching criteria
    pub match_count: usize,
    /// Threshold that was applied
    pub required_matches: usize,
    /// Per-criterion breakdown (empty for non-startups)
    pub details: Vec<CriterionDetail>,
}

/// A scheme paired with its evaluation
#[derive(Debug, Clone)]
pub struct SchemeEvaluation<'a> {
    /// The evaluated scheme
    pub scheme: &'a Scheme,
    /// The verdict
    pub evaluation: Evaluation,
}

/// Ordering of multi-scheme results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrder {
    /// Keep the caller's scheme order
    #[default]
    AsGiven,
    /// Eligible schemes first, otherwise caller order
    EligibleFirst,
    /// Highest match count first, otherwise caller order
    MostMatches,
}

impl std::str::FromStr for ResultOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "as-given" | "given" | "none" => Ok(Self::AsGiven),
            "eligible" | "eligible-first" => Ok(Self::EligibleFirst),
            "matches" | "most-matches" => Ok(Self::MostMatches),
            _ => Err(format!("Invalid sort order: {s}. Use: as-given, eligible, matches")),
        }
    }
}

impl std::fmt::Display for ResultOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AsGiven => write!(f, "as-given"),
            Self::EligibleFirst => write!(f, "eligible"),
            Self::MostMatches => write!(f, "matches"),
        }
    }
}

/// Evaluate a profile against one scheme's rule set
///
/// Non-startup profiles are never eligible and no criteria are evaluated.
/// Unknown labels simply fail to match; this function never fails.
#[must_use]
pub fn evaluate(profile: &Profile, rule: &EligibilityRule, policy: MatchPolicy) -> Evaluation {
    if !profile.is_startup() {
        debug!("Profile {} is a {}, not eligible", profile.id, profile.user_type);
        return Evaluation {
            eligible: false,
            match_count: 0,
            required_matches: policy.required_matches,
            details: Vec::new(),
        };
    }

    let details: Vec<CriterionDetail> =
        Criterion::ALL.into_iter().map(|c| check_criterion(c, profile, rule)).collect();

    let match_count = details.iter().filter(|d| d.matched).count();
    let eligible = match_count >= policy.required_matches;

    debug!(
        "Profile {}: {match_count}/{CRITERIA_COUNT} criteria matched ({} required), {}",
        profile.id,
        policy.required_matches,
        if eligible { "ELIGIBLE" } else { "NOT ELIGIBLE" }
    );

    Evaluation {
        eligible,
        match_count,
        required_matches: policy.required_matches,
        details,
    }
}

/// Evaluate a profile against every scheme
///
/// Each scheme is evaluated independently. Results follow `schemes` order
/// unless `order` asks for a (stable) re-sort.
#[must_use]
pub fn evaluate_all<'a>(
    profile: &Profile,
    schemes: &'a [Scheme],
    policy: MatchPolicy,
    order: ResultOrder,
) -> Vec<SchemeEvaluation<'a>> {
    let mut results: Vec<SchemeEvaluation<'a>> = schemes
        .iter()
        .map(|scheme| {
            debug!("Checking profile {} against scheme {}", profile.id, scheme.name);
            SchemeEvaluation {
                scheme,
                evaluation: evaluate(profile, &scheme.eligibility, policy),
            }
        })
        .collect();

    match order {
        ResultOrder::AsGiven => {},
        ResultOrder::EligibleFirst => results.sort_by_key(|r| !r.evaluation.eligible),
        ResultOrder::MostMatches => {
            results.sort_by(|a, b| b.evaluation.match_count.cmp(&a.evaluation.match_count));
        },
    }

    results
}

fn check_criterion(criterion: Criterion, profile: &Profile, rule: &EligibilityRule) -> CriterionDetail {
    let detail = match criterion {
        Criterion::StartupStage => {
            match_any_of(criterion, &rule.startup_stages, profile.startup_stage.as_deref())
        },
        Criterion::Industry => {
            match_any_of(criterion, &rule.industry_types, profile.effective_industry())
        },
        Criterion::AnnualRevenue => {
            match_any_of(criterion, &rule.annual_revenue, profile.annual_revenue.as_deref())
        },
        Criterion::EmployeeRange => match_any_of(
            criterion,
            &rule.employee_ranges,
            profile.employee_band().map(EmployeeBand::label),
        ),
        Criterion::Location => {
            match_any_of(criterion, &rule.locations, profile.effective_location())
        },
        Criterion::ExistingSupport => {
            match_support(rule.existing_support, profile.has_existing_support())
        },
    };

    if detail.required.is_unconstrained() {
        debug!("✓ No {} criteria, automatic match", criterion.label().to_lowercase());
    } else if detail.matched {
        debug!("✓ {criterion} match: {}", detail.profile_value.as_deref().unwrap_or("-"));
    } else {
        debug!(
            "✗ {criterion} mismatch: profile has {}, criteria needs {}",
            detail.profile_value.as_deref().unwrap_or("nothing"),
            detail.required
        );
    }

    detail
}

fn match_any_of(criterion: Criterion, allowed: &[String], value: Option<&str>) -> CriterionDetail {
    let matched = allowed.is_empty() || value.is_some_and(|v| allowed.iter().any(|a| a == v));
    CriterionDetail {
        criterion,
        matched,
        profile_value: value.map(String::from),
        required: Requirement::AnyOf(allowed.to_vec()),
    }
}

fn match_support(required: Option<bool>, has_support: bool) -> CriterionDetail {
    CriterionDetail {
        criterion: Criterion::ExistingSupport,
        matched: required.is_none_or(|r| r == has_support),
        profile_value: Some(has_support.to_string()),
        required: Requirement::Support(required),
    }
}
