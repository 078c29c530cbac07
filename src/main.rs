//! Likha Licensing Platform server
//!
//! Dual-listener HTTP server for the Likha development environment. The
//! application listener renders the landing page at `/` and `Page not found`
//! for every other path; the management listener exposes the
//! contract-management health endpoints on a separate port.

use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod mgmt;
mod routing;
mod server;
mod views;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, honoring the configured worker count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let app_addr = cfg.get_socket_addr()?;
    let mgmt_addr = cfg.get_mgmt_socket_addr()?;

    let app_listener = server::create_reusable_listener(app_addr)?;
    let mgmt_listener = server::create_reusable_listener(mgmt_addr)?;

    let state = Arc::new(config::AppState::new(&cfg));

    let signals = Arc::new(server::signal::SignalHandler::new());
    server::signal::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&app_addr, &mgmt_addr, &cfg);

    // LocalSet for spawn_local support in the connection tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run(
            app_listener,
            mgmt_listener,
            state,
            Arc::clone(&signals.shutdown),
        ))
        .await?;

    logger::log_shutdown();
    Ok(())
}
