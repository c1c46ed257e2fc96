//! Scheme repository port
//!
//! Defines the interface for loading and adding government schemes.

use super::super::models::{NewScheme, Scheme};

/// Repository for government schemes
///
/// Implementations handle persistence (JSON documents, in-memory, ...).
pub trait SchemeRepository: Send + Sync {
    /// List all schemes in storage order
    fn list(&self) -> anyhow::Result<Vec<Scheme>>;

    /// Find a scheme by id
    fn get(&self, id: &str) -> anyhow::Result<Option<Scheme>>;

    /// Store a new scheme, assigning its id and creation time
    fn add(&self, scheme: NewScheme) -> anyhow::Result<Scheme>;

    /// List all schemes, newest first
    fn list_recent(&self) -> anyhow::Result<Vec<Scheme>> {
        let mut all = self.list()?;
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
