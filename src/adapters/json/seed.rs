//! Built-in scheme catalogue

use crate::core::models::NewScheme;

use super::documents::StoreError;

const CATALOGUE: &str = include_str!("seed_schemes.json");

/// Representative central government schemes
///
/// # Errors
///
/// Returns an error if the embedded catalogue does not parse.
pub fn builtin_catalog() -> Result<Vec<NewScheme>, StoreError> {
    Ok(serde_json::from_str(CATALOGUE)?)
}
