//! Business logic services
//!
//! Pure logic that operates on domain models. Services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`matcher`] - Score profiles against scheme eligibility criteria

pub mod matcher;

pub use matcher::{
    CRITERIA_COUNT, CriterionDetail, DEFAULT_REQUIRED_MATCHES, Evaluation, MatchPolicy,
    Requirement, ResultOrder, SchemeEvaluation, evaluate, evaluate_all,
};
