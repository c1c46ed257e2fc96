//! Core domain logic for govmatch
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Profile, Scheme, `EligibilityRule`, `EmployeeBand`)
//! - `services/` - The eligibility matcher
//! - `ports/` - Trait definitions for profile and scheme storage

pub mod models;
pub mod ports;
pub mod services;
