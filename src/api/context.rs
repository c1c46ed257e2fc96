//! Handler dependencies

use std::sync::Arc;

use crate::core::ports::{ProfileRepository, SchemeRepository};
use crate::core::services::MatchPolicy;

/// Repositories and matching policy shared by all handlers
#[derive(Clone)]
pub struct ApiContext {
    /// Profile lookup
    pub profiles: Arc<dyn ProfileRepository>,
    /// Scheme listing and storage
    pub schemes: Arc<dyn SchemeRepository>,
    /// Eligibility threshold
    pub policy: MatchPolicy,
}

impl ApiContext {
    /// Build a context from separate repositories
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        schemes: Arc<dyn SchemeRepository>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            profiles,
            schemes,
            policy,
        }
    }

    /// Build a context from one store serving both collections
    #[must_use]
    pub fn from_store<S>(store: Arc<S>, policy: MatchPolicy) -> Self
    where
        S: ProfileRepository + SchemeRepository + 'static,
    {
        Self::new(store.clone(), store, policy)
    }
}

impl std::fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiContext").field("policy", &self.policy).finish_non_exhaustive()
    }
}
