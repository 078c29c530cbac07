//! Contract management health model
//!
//! A health document is a status plus an ordered map of details. The
//! contract-management check validates that the application route table is
//! ready to serve: the landing route is bound at `/` and the fallback covers
//! everything else. Evaluation is infallible; a failed check produces a
//! `DOWN` document, never an error.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::config::AppState;

/// Overall health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "UP")]
    Up,
    #[serde(rename = "DOWN")]
    Down,
}

/// Health document: status plus detail map, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    status: Status,
    details: BTreeMap<String, serde_json::Value>,
}

impl Health {
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: Status::Up,
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn down() -> Self {
        Self {
            status: Status::Down,
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self.status, Status::Up)
    }
}

/// Evaluate contract-management readiness.
///
/// Validates the application route table end to end: the landing view must
/// render at `/` and an unregistered probe path must produce the designed
/// fallback.
#[must_use]
pub fn contract_management_health(state: &AppState) -> Health {
    let started = Instant::now();

    let landing = (state.routes.resolve("/"))();
    if landing.status != 200 || !landing.body.contains("Likha Licensing Platform") {
        return Health::down()
            .with_detail("error", "Landing route validation failed")
            .with_detail("validation_time_ms", elapsed_ms(&started));
    }

    // Probe path that is never registered; must hit the wildcard default
    let fallback = (state.routes.resolve("/__health_probe__"))();
    if fallback.status != 404 || fallback.body != "Page not found" {
        return Health::down()
            .with_detail("error", "Fallback route validation failed")
            .with_detail("validation_time_ms", elapsed_ms(&started));
    }

    Health::up()
        .with_detail("routes_registered", state.routes.len())
        .with_detail("fallback_validated", true)
        .with_detail("uptime_seconds", state.started_at.elapsed().as_secs())
        .with_detail("validation_time_ms", elapsed_ms(&started))
}

fn elapsed_ms(started: &Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_health_serializes_status_strings() {
        let up = serde_json::to_value(Health::up()).unwrap();
        assert_eq!(up["status"], "UP");

        let down = serde_json::to_value(Health::down().with_detail("error", "boom")).unwrap();
        assert_eq!(down["status"], "DOWN");
        assert_eq!(down["details"]["error"], "boom");
    }

    #[test]
    fn test_details_are_ordered_by_key() {
        let health = Health::up()
            .with_detail("z_last", 1)
            .with_detail("a_first", 2);
        let json = serde_json::to_string(&health).unwrap();
        assert!(json.find("a_first").unwrap() < json.find("z_last").unwrap());
    }

    #[test]
    fn test_route_table_validation_passes() {
        let config = Config::load_from("no-such-config-file").unwrap();
        let state = AppState::new(&config);
        let health = contract_management_health(&state);
        assert!(health.is_up());

        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["details"]["routes_registered"], 1);
        assert_eq!(value["details"]["fallback_validated"], true);
    }
}
