use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::Parser;

use site_forge::config::Config;
use site_forge::log_info;
use site_forge::site::service::SiteService;
use site_forge::{logger, server};

/// AI-powered website generation service
#[derive(Parser)]
#[command(name = "site-forge", version, about)]
struct Cli {
    /// Path to a TOML configuration file (defaults to the personal config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding the configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init().map_err(|e| anyhow!("{e}"))?;

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.check_environment()?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow!("Invalid bind address: {e}"))?;

    let service = Arc::new(SiteService::new(config)?);

    log_info!("site-forge {} starting", env!("CARGO_PKG_VERSION"));
    log_info!("  POST /api/criar-site - generate a site");
    log_info!("  GET  /api/health     - service status");
    log_info!("  GET  /api/exemplos   - example requests");

    server::serve(addr, service).await
}
