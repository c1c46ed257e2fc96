//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers
//! that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients such as the CLI.
//!
//! ## Design
//!
//! - **Handlers receive their repositories**: an [`ApiContext`] carries the
//!   profile and scheme ports plus the matching policy
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod context;
mod error;
mod handlers;
mod types;

pub use context::ApiContext;
pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    check_eligibility, create_scheme, explain_eligibility, get_health, get_scheme, list_schemes,
};
pub use types::{
    ApiResponse, CreateSchemeRequest, EligibilityItem, ExplainData, HealthData, SchemeBreakdown,
};
