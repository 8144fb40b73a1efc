// Accept loop
// Runs until the shutdown signal fires, then drops the listener.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Serve connections until shutdown is requested.
///
/// Shutdown is best-effort: the listener is dropped immediately and
/// in-flight connections are left to finish (or not) on their own tasks.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        accept_connection(stream, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = state.shutdown.notified() => {
                logger::log_server_stopping(active_connections.load(Ordering::SeqCst));
                break;
            }
        }
    }

    // Closing the listener only stops new accepts; tasks spawned for
    // already-accepted connections still own their streams.
    drop(listener);

    // Give the response that triggered the shutdown time to flush before
    // the runtime is torn down. No full drain of in-flight requests.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig};
    use crate::logger::LogWriter;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn start_test_server(
        name: &str,
    ) -> (SocketAddr, tokio::task::JoinHandle<()>, std::path::PathBuf) {
        let log_path =
            std::env::temp_dir().join(format!("echod-loop-{name}-{}.log", std::process::id()));
        let listener =
            super::super::create_listener("127.0.0.1:0".parse().expect("loopback addr"))
                .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let config = Config {
            server: ServerConfig {
                host: addr.ip().to_string(),
                port: addr.port(),
                workers: None,
            },
            logging: LoggingConfig {
                file: log_path.to_string_lossy().into_owned(),
            },
        };
        let log_writer = LogWriter::create(&log_path).expect("create log file");
        let state = Arc::new(AppState::new(config, log_writer, addr));
        let handle = tokio::spawn(start_server_loop(listener, state));
        (addr, handle, log_path)
    }

    async fn roundtrip(addr: SocketAddr, raw: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
        stream.write_all(raw.as_bytes()).await.expect("write request");
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.expect("read response");
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_hello_roundtrip() {
        let (addr, handle, log_path) = start_test_server("hello").await;

        let resp = roundtrip(
            addr,
            "GET /hello/world HTTP/1.1\r\nHost: t\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(resp.starts_with("HTTP/1.1 200"), "got: {resp}");
        assert!(resp.ends_with("Hello world"), "got: {resp}");

        handle.abort();
        let _ = std::fs::remove_file(&log_path);
    }

    #[tokio::test]
    async fn test_put_hello2_with_form_body() {
        let (addr, handle, log_path) = start_test_server("hello2-put").await;

        let body = "a=1&b=two";
        let raw = format!(
            "PUT /hello2/world HTTP/1.1\r\nHost: t\r\n\
             Content-Type: application/x-www-form-urlencoded\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let resp = roundtrip(addr, &raw).await;
        assert!(resp.starts_with("HTTP/1.1 200"), "got: {resp}");
        assert!(resp.ends_with("/hello2/world world"), "got: {resp}");

        let log = std::fs::read_to_string(&log_path).expect("read log file");
        assert!(log.contains("Got path = /hello2/world"));
        assert!(log.contains("a 1"));
        assert!(log.contains("b two"));

        handle.abort();
        let _ = std::fs::remove_file(&log_path);
    }

    #[tokio::test]
    async fn test_unmatched_method_gets_404() {
        let (addr, handle, log_path) = start_test_server("miss").await;

        let resp = roundtrip(
            addr,
            "PUT /hello/world HTTP/1.1\r\nHost: t\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(resp.starts_with("HTTP/1.1 404"), "got: {resp}");

        handle.abort();
        let _ = std::fs::remove_file(&log_path);
    }

    #[tokio::test]
    async fn test_shutdown_delivers_response_then_closes_listener() {
        let (addr, handle, log_path) = start_test_server("shutdown").await;

        let resp = roundtrip(
            addr,
            "GET /shutdown HTTP/1.1\r\nHost: t\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(resp.starts_with("HTTP/1.1 200"), "got: {resp}");
        assert!(resp.ends_with("stopped"), "got: {resp}");

        // The loop must exit on its own, and the port must stop accepting
        handle.await.expect("server loop should exit cleanly");
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());

        let _ = std::fs::remove_file(&log_path);
    }
}
