use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hub_catalog_server::catalog::load_catalog;
use hub_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use hub_catalog_server::server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
#[command(version, about = "HaloAI Studios Hub catalog service")]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping). 0 disables it.
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// JSON file with the project list. The built-in projects are served when omitted.
    #[clap(long, value_parser = parse_path)]
    pub catalog_path: Option<PathBuf>,

    /// Restrict CORS to a single origin instead of allowing any.
    #[clap(long)]
    pub cors_allowed_origin: Option<String>,

    /// TOML file whose values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            catalog_path: self.catalog_path.clone(),
            cors_allowed_origin: self.cors_allowed_origin.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Could not initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let catalog = load_catalog(config.catalog_path.as_deref())?;

    run_server(catalog, config.server_config()).await
}
