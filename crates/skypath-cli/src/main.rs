//! Skypath - cost-aware path search over elevation grids

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skypath_cli::{commands, Args, Config};

/// Used only when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_DIRECTIVES: &str = "skypath_cli=info,skypath_core=info";

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    // Initialize tracing
    // Logs go to stderr; stdout carries the command output.
    let json = config.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let plain = (!config.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    tracing_subscriber::registry()
        .with(json)
        .with(plain)
        .with(filter)
        .init();

    tracing::debug!(?config, "resolved environment configuration");

    let output = commands::run(args, config)?;
    println!("{}", output);

    Ok(())
}
