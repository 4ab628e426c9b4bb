//! regviz HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use regviz_api::ApiConfig;

/// Regular expression validation backend for the regviz visualizer
#[derive(Debug, Parser)]
#[command(name = "regviz-server", version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "REGVIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides the configuration
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Directory of client assets, overrides the configuration
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ApiConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(dir) = args.static_dir {
        config.static_dir = Some(dir);
    }

    regviz_api::init_logging(&config).context("failed to initialize logging")?;

    regviz_api::serve(config).await.context("server exited with an error")?;
    Ok(())
}
