use serde::Deserialize;
use std::net::SocketAddr;
use tokio::sync::Notify;

use crate::logger::LogWriter;
use crate::routing::{self, Route};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Request log path, created fresh at startup.
    pub file: String,
}

impl Config {
    /// Load configuration with compiled-in defaults.
    ///
    /// An optional `config.{toml,...}` file in the working directory may
    /// override the defaults; without one the server behaves exactly as
    /// the defaults describe.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9999)?
            .set_default("logging.file", "server.log")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared server context, injected into every handler invocation.
///
/// Handlers reach the logger and the shutdown signal through this state
/// rather than through process-wide globals.
pub struct AppState {
    pub config: Config,
    pub logger: LogWriter,
    pub routes: Vec<Route>,
    pub local_addr: SocketAddr,
    /// Notified by the shutdown/exit handlers; the accept loop closes
    /// the listener when it fires.
    pub shutdown: Notify,
}

impl AppState {
    pub fn new(config: Config, logger: LogWriter, local_addr: SocketAddr) -> Self {
        Self {
            config,
            logger,
            routes: routing::route_table(),
            local_addr,
            shutdown: Notify::new(),
        }
    }
}
