//! JSON document store
//!
//! - [`documents`] - Read and write collection files
//! - [`repository`] - `ProfileRepository` / `SchemeRepository` implementation
//! - [`seed`] - Built-in scheme catalogue

pub mod documents;
pub mod repository;
pub mod seed;

pub use documents::{PROFILES_FILE, SCHEMES_FILE, StoreError};
pub use repository::{JsonStore, SeedOutcome};
pub use seed::builtin_catalog;
