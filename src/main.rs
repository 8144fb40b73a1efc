use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // The request log must exist before anything is served; failing to
    // create it aborts startup with a non-zero exit.
    let log_writer = match logger::LogWriter::create(&cfg.logging.file) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("Failed to create log file '{}': {e}", cfg.logging.file);
            return Err(e.into());
        }
    };

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        println!("[CONFIG] Using {workers} worker threads");
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg, log_writer))
}

async fn async_main(
    cfg: config::Config,
    log_writer: logger::LogWriter,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let local_addr = listener.local_addr()?;

    let state = Arc::new(config::AppState::new(cfg, log_writer, local_addr));

    logger::log_server_start(&local_addr, &state.config);
    server::start_signal_handler(Arc::clone(&state));

    server::start_server_loop(listener, state).await;

    println!("Server stopped");
    Ok(())
}
