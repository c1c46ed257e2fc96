//! Check a profile's eligibility

use govmatch::api;
use govmatch::config::Config;
use govmatch::core::services::ResultOrder;
use govmatch::output::{EligibilityReport, ExplainReport, OutputMode};

/// Print eligibility for one profile against every scheme
pub fn check(
    config: &Config,
    user_id: &str,
    explain: bool,
    sort: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let order: ResultOrder = sort.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let ctx = super::open_context(config)?;

    if explain {
        let data = api::explain_eligibility(&ctx, user_id, order)?;
        ExplainReport(data).render(mode);
        return Ok(());
    }

    if order != ResultOrder::AsGiven {
        log::warn!("--sort only applies with --explain; keeping catalogue order");
    }

    let results = api::check_eligibility(&ctx, user_id)?;
    EligibilityReport {
        user_id: user_id.to_string(),
        results,
    }
    .render(mode);
    Ok(())
}
