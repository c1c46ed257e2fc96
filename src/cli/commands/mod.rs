//! Command implementations

use std::sync::Arc;

use govmatch::adapters::JsonStore;
use govmatch::api::ApiContext;
use govmatch::config::Config;

mod check;
mod schemes;
mod seed;
#[cfg(feature = "server")]
mod serve;

pub use check::check;
pub use schemes::schemes;
pub use seed::seed;
#[cfg(feature = "server")]
pub use serve::serve;

/// Open the JSON store named by the config
fn open_store(config: &Config) -> Arc<JsonStore> {
    log::debug!("Using data directory {}", config.store.data_dir.display());
    Arc::new(JsonStore::new(&config.store.data_dir))
}

/// Build the handler context for the configured store and threshold
fn open_context(config: &Config) -> anyhow::Result<ApiContext> {
    Ok(ApiContext::from_store(open_store(config), config.match_policy()?))
}
