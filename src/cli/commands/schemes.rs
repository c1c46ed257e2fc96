//! List the scheme catalogue

use govmatch::api;
use govmatch::config::Config;
use govmatch::output::{OutputMode, SchemeList};

/// Print every scheme, newest first
pub fn schemes(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = super::open_context(config)?;
    SchemeList(api::list_schemes(&ctx)?).render(mode);
    Ok(())
}
