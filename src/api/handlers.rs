//! Pure API handlers
//!
//! These handlers are HTTP-agnostic. They take an [`ApiContext`] and typed
//! input, and return `Result<T, ApiError>`.

use log::{debug, info};

use crate::core::models::{Profile, Scheme};
use crate::core::services::{ResultOrder, evaluate_all};

use super::context::ApiContext;
use super::error::ApiError;
use super::types::{CreateSchemeRequest, EligibilityItem, ExplainData, HealthData, SchemeBreakdown};

// =============================================================================
// HEALTH
// =============================================================================

/// Service status
pub fn get_health(ctx: &ApiContext) -> Result<HealthData, ApiError> {
    let schemes = ctx.schemes.list()?.len();
    Ok(HealthData {
        status: "ok",
        version: crate::VERSION,
        schemes,
        required_matches: ctx.policy.required_matches,
    })
}

// =============================================================================
// SCHEMES
// =============================================================================

/// List all schemes, newest first
pub fn list_schemes(ctx: &ApiContext) -> Result<Vec<Scheme>, ApiError> {
    Ok(ctx.schemes.list_recent()?)
}

/// Get a single scheme by id
pub fn get_scheme(ctx: &ApiContext, id: &str) -> Result<Scheme, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::bad_request("Scheme id cannot be empty"));
    }

    ctx.schemes.get(id)?.ok_or_else(|| ApiError::not_found("Scheme not found"))
}

/// Create a new scheme
pub fn create_scheme(ctx: &ApiContext, req: CreateSchemeRequest) -> Result<Scheme, ApiError> {
    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let scheme = ctx.schemes.add(req)?;
    info!("Created scheme {} ({})", scheme.id, scheme.name);
    Ok(scheme)
}

// =============================================================================
// ELIGIBILITY
// =============================================================================

/// Check a profile against every scheme
///
/// Results follow the repository's scheme order.
pub fn check_eligibility(ctx: &ApiContext, user_id: &str) -> Result<Vec<EligibilityItem>, ApiError> {
    let (profile, schemes) = load_inputs(ctx, user_id)?;

    let results = evaluate_all(&profile, &schemes, ctx.policy, ResultOrder::AsGiven);
    let items: Vec<EligibilityItem> = results.iter().map(EligibilityItem::from).collect();

    debug!(
        "Profile {user_id}: eligible for {}/{} schemes",
        items.iter().filter(|i| i.eligible).count(),
        items.len()
    );
    Ok(items)
}

/// Check a profile against every scheme with a per-criterion breakdown
pub fn explain_eligibility(
    ctx: &ApiContext,
    user_id: &str,
    order: ResultOrder,
) -> Result<ExplainData, ApiError> {
    let (profile, schemes) = load_inputs(ctx, user_id)?;

    let breakdown: Vec<SchemeBreakdown> = evaluate_all(&profile, &schemes, ctx.policy, order)
        .into_iter()
        .map(SchemeBreakdown::from)
        .collect();

    Ok(ExplainData {
        user_id: profile.id,
        required_matches: ctx.policy.required_matches,
        schemes: breakdown,
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn load_inputs(
    ctx: &ApiContext,
    user_id: &str,
) -> Result<(Profile, Vec<Scheme>), ApiError> {
    if user_id.trim().is_empty() {
        return Err(ApiError::bad_request("User id cannot be empty"));
    }

    let profile = ctx
        .profiles
        .find_by_id(user_id)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    let schemes = ctx.schemes.list()?;

    Ok((profile, schemes))
}
