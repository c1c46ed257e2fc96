//! Run the HTTP API server

use govmatch::config::Config;

/// Serve the API until the process is stopped
pub fn serve(config: &Config) -> anyhow::Result<()> {
    let ctx = super::open_context(config)?;
    crate::server::tiny_http::serve(&ctx, &config.listen_addr())
}
