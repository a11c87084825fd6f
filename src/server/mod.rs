pub mod config;
mod http_layers;
pub mod server;
pub mod state;
pub mod views;

pub use config::ServerConfig;
pub use http_layers::*;
pub use server::run_server;
