mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::net::IpAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_DB_FILE_NAME: &str = "animeDB.json";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub public_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let public_dir = file
            .public_dir
            .map(PathBuf::from)
            .or_else(|| cli.public_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        if public_dir.exists() && !public_dir.is_dir() {
            bail!("public_dir is not a directory: {:?}", public_dir);
        }

        // The database defaults to living next to the other public assets
        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .unwrap_or_else(|| public_dir.join(DEFAULT_DB_FILE_NAME));

        if !db_path.exists() {
            bail!("Database file does not exist: {:?}", db_path);
        }
        if !db_path.is_file() {
            bail!("db_path is not a file: {:?}", db_path);
        }

        let host_str = file
            .host
            .or_else(|| cli.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host_str
            .parse()
            .with_context(|| format!("Invalid host address: {}", host_str))?;

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        Ok(Self {
            db_path,
            public_dir,
            host,
            port,
            logging_level,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
