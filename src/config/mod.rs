mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub catalog_path: Option<PathBuf>,
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    /// Built-in projects are served when unset.
    pub catalog_path: Option<PathBuf>,
    pub cors_allowed_origin: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);
        if port == 0 {
            bail!("port must be greater than 0");
        }
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if metrics_port != 0 && metrics_port == port {
            bail!("metrics_port and port must differ, both are {}", port);
        }

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level \"{}\"", s),
            },
            None => cli.logging_level.clone(),
        };

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone());
        if let Some(path) = &catalog_path {
            if !path.is_file() {
                bail!("Catalog file does not exist: {:?}", path);
            }
        }

        let cors_allowed_origin = file
            .cors_allowed_origin
            .or_else(|| cli.cors_allowed_origin.clone());

        Ok(Self {
            port,
            metrics_port,
            logging_level,
            catalog_path,
            cors_allowed_origin,
        })
    }
}

impl AppConfig {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            cors_allowed_origin: self.cors_allowed_origin.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
