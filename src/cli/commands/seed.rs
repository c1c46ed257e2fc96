//! Load the built-in scheme catalogue

use govmatch::adapters::json::SeedOutcome;
use govmatch::config::Config;
use govmatch::output::{OperationResult, OutputMode};

/// Write the built-in catalogue into the data directory
pub fn seed(config: &Config, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let store = super::open_store(config);

    let result = match store.seed(force)? {
        SeedOutcome::Written(count) => OperationResult {
            success: true,
            message: format!("Seeded {count} schemes into {}", store.dir().display()),
        },
        SeedOutcome::Skipped => OperationResult {
            success: false,
            message: "Scheme catalogue already exists. Use --force to overwrite.".to_string(),
        },
    };

    result.render(mode);
    Ok(())
}
