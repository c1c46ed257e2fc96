//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use govmatch::config::Config;
use govmatch::output::OutputMode;

/// govmatch - Government scheme eligibility for startups
#[derive(Parser, Debug)]
#[command(
    name = "govmatch",
    version,
    about = "Government scheme eligibility for startups",
    long_about = "Match startup profiles against government scheme eligibility criteria.\n\n\
                  A profile is eligible for a scheme when enough of the six criteria\n\
                  (stage, industry, revenue, head count, location, existing support) match."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $GOVMATCH_CONFIG or ~/.config/govmatch/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding profiles.json and schemes.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        bind: Option<String>,
    },

    /// Check a profile's eligibility for every scheme
    Check {
        /// Profile id
        user_id: String,

        /// Show the per-criterion breakdown
        #[arg(short, long)]
        explain: bool,

        /// Result order: as-given, eligible, matches
        #[arg(short, long, default_value = "as-given")]
        sort: String,
    },

    /// List the scheme catalogue
    Schemes,

    /// Write the built-in scheme catalogue to the data directory
    Seed {
        /// Overwrite an existing catalogue
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("govmatch v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'govmatch --help' for usage");
            println!("Run 'govmatch seed' to load the built-in scheme catalogue");
        }
        return Ok(());
    };

    if matches!(command, Command::Version) {
        if output_mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }));
        } else {
            println!("govmatch v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.store.data_dir = dir;
    }

    match command {
        #[cfg(feature = "server")]
        Command::Serve { port, bind } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            commands::serve(&config)
        },
        Command::Check {
            user_id,
            explain,
            sort,
        } => commands::check(&config, &user_id, explain, &sort, output_mode),
        Command::Schemes => commands::schemes(&config, output_mode),
        Command::Seed { force } => commands::seed(&config, force, output_mode),
        Command::Version => Ok(()),
    }
}
