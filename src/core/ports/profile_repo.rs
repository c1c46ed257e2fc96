//! Profile repository port
//!
//! Defines the interface for looking up user profiles.

use super::super::models::Profile;

/// Read access to stored user profiles
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by document id
    ///
    /// Returns `Ok(None)` when no such profile exists.
    fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Profile>>;
}
