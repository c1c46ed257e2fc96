//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.
//! Field names are camelCase to match the stored documents.

use serde::Serialize;

use crate::core::models::{NewScheme, Scheme};
use crate::core::services::{CriterionDetail, SchemeEvaluation};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a scheme
pub type CreateSchemeRequest = NewScheme;

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Health endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    /// Always "ok" when the store is reachable
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Number of stored schemes
    pub schemes: usize,
    /// Eligibility threshold in effect
    pub required_matches: usize,
}

/// One scheme's eligibility verdict for a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityItem {
    /// Scheme id
    pub scheme_id: String,
    /// Scheme name
    pub scheme_name: String,
    /// Scheme description
    pub description: String,
    /// Administering ministry
    pub ministry: String,
    /// Funding amount label
    pub funding_amount: String,
    /// Verdict
    pub eligible: bool,
    /// Where to apply
    pub application_link: String,
    /// Intended audience
    pub target_audience: String,
}

impl From<&SchemeEvaluation<'_>> for EligibilityItem {
    fn from(result: &SchemeEvaluation<'_>) -> Self {
        let Scheme {
            id,
            name,
            description,
            ministry,
            funding_amount,
            application_link,
            target_audience,
            ..
        } = result.scheme;

        Self {
            scheme_id: id.clone(),
            scheme_name: name.clone(),
            description: description.clone(),
            ministry: ministry.clone(),
            funding_amount: funding_amount.clone(),
            eligible: result.evaluation.eligible,
            application_link: application_link.clone(),
            target_audience: target_audience.clone(),
        }
    }
}

/// One scheme's criterion-by-criterion breakdown
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeBreakdown {
    /// Scheme id
    pub scheme_id: String,
    /// Scheme name
    pub scheme_name: String,
    /// Verdict
    pub eligible: bool,
    /// Number of matching criteria
    pub match_count: usize,
    /// Per-criterion detail
    pub criteria: Vec<CriterionDetail>,
}

impl From<SchemeEvaluation<'_>> for SchemeBreakdown {
    fn from(result: SchemeEvaluation<'_>) -> Self {
        Self {
            scheme_id: result.scheme.id.clone(),
            scheme_name: result.scheme.name.clone(),
            eligible: result.evaluation.eligible,
            match_count: result.evaluation.match_count,
            criteria: result.evaluation.details,
        }
    }
}

/// Explain endpoint response data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainData {
    /// Profile id
    pub user_id: String,
    /// Eligibility threshold applied
    pub required_matches: usize,
    /// Breakdown per scheme
    pub schemes: Vec<SchemeBreakdown>,
}
