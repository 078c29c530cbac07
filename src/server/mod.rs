// Server module entry point
// Accept loops for the application and management listeners

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

/// Run both listeners until the shutdown signal fires.
///
/// The management listener runs as a spawned task; the application listener
/// runs in the calling task. Active connections finish in their own tasks
/// after the loops stop.
pub async fn run(
    app_listener: TcpListener,
    mgmt_listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_connections = Arc::new(AtomicUsize::new(0));
    let mgmt_connections = Arc::new(AtomicUsize::new(0));

    let mgmt_state = Arc::clone(&state);
    let mgmt_shutdown = Arc::clone(&shutdown);
    tokio::task::spawn_local(async move {
        accept_loop(
            mgmt_listener,
            mgmt_state,
            mgmt_connections,
            true,  // is_mgmt
            false, // check_connection_limits
            mgmt_shutdown,
        )
        .await;
    });

    accept_loop(
        app_listener,
        state,
        app_connections,
        false, // is_mgmt
        true,  // check_connection_limits
        shutdown,
    )
    .await;

    Ok(())
}

/// Accept connections until shutdown is requested.
async fn accept_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    is_mgmt: bool,
    check_connection_limits: bool,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            check_connection_limits,
                            is_mgmt,
                        );
                    }
                    Err(e) => {
                        if is_mgmt {
                            logger::log_mgmt_error(&format!("Failed to accept connection: {e}"));
                        } else {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }
}
