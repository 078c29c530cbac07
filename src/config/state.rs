// Application state module
// Bundles the loaded configuration with runtime state shared across listeners

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use super::types::Config;
use crate::routing::{self, RouteTable};

/// Application state shared by both listeners.
pub struct AppState {
    pub config: Config,
    /// Route table for the application listener. Fixed at startup.
    pub routes: RouteTable,
    /// Process start time, reported by the health endpoints.
    pub started_at: Instant,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config: config.clone(),
            routes: routing::app_routes(),
            started_at: Instant::now(),
            cached_access_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_state_caches_access_log_flag() {
        let mut config = Config::load_from("nonexistent-config").unwrap();
        config.logging.access_log = false;
        let state = AppState::new(&config);
        assert!(!state.cached_access_log.load(Ordering::Relaxed));
        assert_eq!(state.routes.len(), 1);
    }
}
