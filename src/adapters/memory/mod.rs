//! In-memory repository
//!
//! Holds profiles and schemes in process memory. Used by tests and for
//! embedding the matcher without a document store.

use std::sync::RwLock;

use chrono::Utc;

use crate::core::models::{NewScheme, Profile, Scheme, next_scheme_id};
use crate::core::ports::{ProfileRepository, SchemeRepository};

/// Profiles and schemes kept in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: RwLock<Vec<Profile>>,
    schemes: RwLock<Vec<Scheme>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with profiles and schemes
    #[must_use]
    pub fn with_data(profiles: Vec<Profile>, schemes: Vec<Scheme>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
            schemes: RwLock::new(schemes),
        }
    }

    /// Insert or replace a profile
    pub fn upsert_profile(&self, profile: Profile) -> anyhow::Result<()> {
        let mut profiles = self.profiles.write().map_err(|_| anyhow::anyhow!("profile store poisoned"))?;
        profiles.retain(|p| p.id != profile.id);
        profiles.push(profile);
        Ok(())
    }
}

impl ProfileRepository for InMemoryStore {
    fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Profile>> {
        let profiles = self.profiles.read().map_err(|_| anyhow::anyhow!("profile store poisoned"))?;
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }
}

impl SchemeRepository for InMemoryStore {
    fn list(&self) -> anyhow::Result<Vec<Scheme>> {
        let schemes = self.schemes.read().map_err(|_| anyhow::anyhow!("scheme store poisoned"))?;
        Ok(schemes.clone())
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Scheme>> {
        let schemes = self.schemes.read().map_err(|_| anyhow::anyhow!("scheme store poisoned"))?;
        Ok(schemes.iter().find(|s| s.id == id).cloned())
    }

    fn add(&self, scheme: NewScheme) -> anyhow::Result<Scheme> {
        let mut schemes = self.schemes.write().map_err(|_| anyhow::anyhow!("scheme store poisoned"))?;
        let id = next_scheme_id(schemes.iter().map(|s| s.id.as_str()));
        let scheme = scheme.into_scheme(id, Utc::now());
        schemes.push(scheme.clone());
        Ok(scheme)
    }
}
