//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::api::{EligibilityItem, ExplainData};
use crate::core::models::Scheme;
use crate::core::services::CRITERIA_COUNT;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Eligibility verdicts for one profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    /// Profile id
    pub user_id: String,
    /// One entry per scheme, in catalogue order
    pub results: Vec<EligibilityItem>,
}

impl EligibilityReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(&self.results),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No schemes found.");
            return;
        }

        let eligible = self.results.iter().filter(|r| r.eligible).count();
        println!(
            "Profile {}: eligible for {eligible} of {} scheme(s)\n",
            self.user_id.bold(),
            self.results.len()
        );

        for r in &self.results {
            let mark = if r.eligible { "ELIGIBLE".green() } else { "NOT ELIGIBLE".red() };
            println!("  [{mark}] {} ({})", r.scheme_name, r.scheme_id);
            println!("          {} · {}", r.ministry, r.funding_amount);
            if r.eligible && !r.application_link.is_empty() {
                println!("          Apply: {}", r.application_link);
            }
            println!();
        }
    }
}

/// Criterion-level breakdown for one profile
#[derive(Debug)]
pub struct ExplainReport(pub ExplainData);

impl ExplainReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(&self.0),
        }
    }

    fn render_human(&self) {
        let data = &self.0;
        if data.schemes.is_empty() {
            println!("No schemes found.");
            return;
        }

        println!(
            "Profile {} ({} of {CRITERIA_COUNT} criteria required)\n",
            data.user_id.bold(),
            data.required_matches
        );

        for s in &data.schemes {
            let verdict = if s.eligible { "ELIGIBLE".green() } else { "NOT ELIGIBLE".red() };
            println!("{} [{verdict}] {}/{CRITERIA_COUNT} matched", s.scheme_name.bold(), s.match_count);

            for c in &s.criteria {
                let mark = if c.matched { "✓".green() } else { "✗".red() };
                println!(
                    "  {mark} {:<17} {} (needs {})",
                    c.criterion.label(),
                    c.profile_value.as_deref().unwrap_or("-"),
                    c.required
                );
            }
            println!();
        }
    }
}

/// Scheme catalogue listing
#[derive(Debug)]
pub struct SchemeList(pub Vec<Scheme>);

impl SchemeList {
    /// Render the list based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(&self.0),
        }
    }

    fn render_human(&self) {
        if self.0.is_empty() {
            println!("No schemes found.");
            println!("Run 'govmatch seed' to load the built-in catalogue");
            return;
        }

        println!("Schemes:\n");
        for s in &self.0 {
            println!("  [{}] {}", s.id, s.name.bold());
            println!("  {} · {}", s.ministry, s.funding_amount);
            if !s.target_audience.is_empty() {
                println!("  For: {}", s.target_audience);
            }
            println!();
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
