use super::RequestsLoggingLevel;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: IpAddr,
    pub port: u16,
    /// Served under `/static`.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            public_dir: PathBuf::from("public"),
        }
    }
}
