//! Logging
//!
//! Two streams: the request log (timestamped lines appended to a file
//! through [`LogWriter`], one writer shared by every handler) and console
//! lifecycle messages on stdout/stderr.

mod format;
mod writer;

pub use writer::LogWriter;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    println!("Request log: {}", config.logging.file);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_server_stopping(active: usize) {
    println!("[Shutdown] Closing listener ({active} connections still active)");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
