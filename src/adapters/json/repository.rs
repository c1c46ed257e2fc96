//! JSON document store
//!
//! Implements the `ProfileRepository` and `SchemeRepository` port traits
//! over `profiles.json` and `schemes.json` in a data directory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use log::{debug, info};

use crate::core::models::{NewScheme, Profile, Scheme, next_scheme_id};
use crate::core::ports::{ProfileRepository, SchemeRepository};

use super::documents::{
    PROFILES_FILE, SCHEMES_FILE, StoreError, load_documents, load_raw_documents, save_documents,
};
use super::seed::builtin_catalog;

/// Outcome of seeding the scheme catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalogue was written with this many schemes
    Written(usize),
    /// A scheme collection already existed and was left alone
    Skipped,
}

/// Document store backed by JSON files
#[derive(Debug)]
pub struct JsonStore {
    /// Directory holding the collection files
    dir: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Create a store rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Data directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn profiles_path(&self) -> PathBuf {
        self.dir.join(PROFILES_FILE)
    }

    fn schemes_path(&self) -> PathBuf {
        self.dir.join(SCHEMES_FILE)
    }

    /// Load all profiles
    ///
    /// # Errors
    ///
    /// Returns an error if `profiles.json` is unreadable or malformed.
    pub fn profiles(&self) -> Result<Vec<Profile>, StoreError> {
        load_documents(&self.profiles_path())
    }

    /// Replace all profiles
    ///
    /// # Errors
    ///
    /// Returns an error if `profiles.json` cannot be written.
    pub fn save_profiles(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        save_documents(&self.profiles_path(), profiles)
    }

    /// Write the built-in scheme catalogue
    ///
    /// An existing scheme collection is kept unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogue cannot be written.
    pub fn seed(&self, force: bool) -> Result<SeedOutcome, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let path = self.schemes_path();

        if path.exists() && !force {
            info!("{} already exists, not seeding", path.display());
            return Ok(SeedOutcome::Skipped);
        }

        let now = Utc::now();
        let schemes: Vec<Scheme> = builtin_catalog()?
            .into_iter()
            .enumerate()
            .map(|(i, new)| new.into_scheme(format!("SCH-{}", i + 1), now))
            .collect();

        save_documents(&path, &schemes)?;
        info!("Seeded {} schemes into {}", schemes.len(), path.display());
        Ok(SeedOutcome::Written(schemes.len()))
    }
}

impl ProfileRepository for JsonStore {
    fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Profile>> {
        Ok(self.profiles()?.into_iter().find(|p| p.id == id))
    }
}

impl SchemeRepository for JsonStore {
    fn list(&self) -> anyhow::Result<Vec<Scheme>> {
        Ok(load_documents(&self.schemes_path())?)
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<Scheme>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }

    fn add(&self, scheme: NewScheme) -> anyhow::Result<Scheme> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let path = self.schemes_path();

        // Untyped so records that fail to parse survive the rewrite
        let mut documents = load_raw_documents(&path)?;
        let id = next_scheme_id(documents.iter().filter_map(document_id));
        let scheme = scheme.into_scheme(id, Utc::now());
        documents.push(serde_json::to_value(&scheme).map_err(StoreError::Encode)?);

        save_documents(&path, &documents)?;
        debug!("Stored scheme {} ({})", scheme.id, scheme.name);
        Ok(scheme)
    }
}

fn document_id(document: &serde_json::Value) -> Option<&str> {
    document.get("id").or_else(|| document.get("_id")).and_then(serde_json::Value::as_str)
}
