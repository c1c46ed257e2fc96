//! Domain models for govmatch
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Profile`] - The user fields eligibility matching reads
//! - [`Scheme`] - A government scheme and its [`EligibilityRule`]
//! - [`EmployeeBand`] - Fixed head-count bands
//! - [`Criterion`] - The six independent eligibility criteria

mod criterion;
mod employee_band;
mod profile;
mod scheme;

pub use criterion::Criterion;
pub use employee_band::EmployeeBand;
pub use profile::{Profile, UserType};
pub use scheme::{EligibilityRule, NewScheme, Scheme, next_scheme_id};
