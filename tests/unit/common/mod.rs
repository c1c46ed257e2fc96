//! Shared test fixtures and helpers
//!
//! Builders for profiles, schemes and stores used across the unit tests.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use govmatch::adapters::InMemoryStore;
use govmatch::api::ApiContext;
use govmatch::core::models::{EligibilityRule, Profile, Scheme, UserType};
use govmatch::core::services::MatchPolicy;
use tempfile::TempDir;

/// The startup profile used throughout the matcher scenarios
pub fn startup_profile(id: &str) -> Profile {
    Profile {
        startup_stage: Some("Early Stage".to_string()),
        industry: Some("IT/Software".to_string()),
        annual_revenue: Some("₹10 Lakhs - ₹50 Lakhs".to_string()),
        number_of_employees: Some(8),
        location: Some("Metro City".to_string()),
        existing_government_support: Some("No".to_string()),
        ..Profile::new(id, UserType::Startup)
    }
}

/// Rule that matches [`startup_profile`] on five of six criteria
pub fn five_of_six_rule() -> EligibilityRule {
    EligibilityRule {
        startup_stages: vec!["Idea".to_string()],
        industry_types: Vec::new(),
        annual_revenue: vec!["₹10 Lakhs - ₹50 Lakhs".to_string()],
        employee_ranges: vec!["6-20".to_string()],
        locations: vec!["Metro City".to_string()],
        existing_support: Some(false),
    }
}

/// Rule that [`startup_profile`] fails on every criterion
pub fn hostile_rule() -> EligibilityRule {
    EligibilityRule {
        startup_stages: vec!["Scaling".to_string()],
        industry_types: vec!["Agriculture".to_string()],
        annual_revenue: vec!["Pre-revenue".to_string()],
        employee_ranges: vec!["More than 100".to_string()],
        locations: vec!["Rural Area".to_string()],
        existing_support: Some(true),
    }
}

/// A scheme with a fixed creation time `minutes` after a base instant
pub fn scheme(id: &str, rule: EligibilityRule, minutes: i64) -> Scheme {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Scheme {
        id: id.to_string(),
        name: format!("Scheme {id}"),
        description: format!("Description of {id}"),
        ministry: "Ministry of MSME".to_string(),
        funding_amount: "Up to ₹10 Lakhs".to_string(),
        eligibility: rule,
        application_link: format!("https://example.gov.in/{id}"),
        target_audience: "Startups".to_string(),
        created_at: base + chrono::Duration::minutes(minutes),
    }
}

/// An API context over an in-memory store with the default policy
pub fn memory_context(profiles: Vec<Profile>, schemes: Vec<Scheme>) -> ApiContext {
    let store = Arc::new(InMemoryStore::with_data(profiles, schemes));
    ApiContext::from_store(store, MatchPolicy::default())
}

/// A temporary data directory
pub struct TestDataDir {
    dir: TempDir,
}

impl TestDataDir {
    /// Create an empty data directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the root
    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    /// Read a file relative to the root
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}
