//! Management API module
//!
//! Health endpoints served on the management listener, kept off the
//! application port so the application surface stays exactly two cases:
//! the landing page and the fallback.

pub mod health;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

use health::Health;

/// Management route handler.
///
/// Dispatches to handler functions based on request path and method.
pub async fn handle_mgmt_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = dispatch(&method, &path, &state);
    logger::log_mgmt_request(method.as_str(), &path, resp.status().as_u16());
    Ok(resp)
}

fn dispatch(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    if *method != Method::GET {
        return response::not_found();
    }

    match path {
        // Basic liveness
        "/health" => {
            response::json_response(StatusCode::OK, &serde_json::json!({ "status": "UP" }))
        }
        // Minimal health suitable for load balancer checks
        "/api/v1/contracts/health/status" => {
            let health = health::contract_management_health(state);
            if health.is_up() {
                response::text_response(StatusCode::OK, "UP")
            } else {
                response::text_response(StatusCode::SERVICE_UNAVAILABLE, "DOWN")
            }
        }
        // Full health document with validation details
        "/api/v1/contracts/health/detailed" => {
            let health = health::contract_management_health(state);
            response::json_response(status_for(&health), &health)
        }
        // Unknown route
        _ => response::not_found(),
    }
}

const fn status_for(health: &Health) -> StatusCode {
    if health.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        let config = Config::load_from("no-such-config-file").unwrap();
        AppState::new(&config)
    }

    #[test]
    fn test_liveness_endpoint() {
        let resp = dispatch(&Method::GET, "/health", &state());
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_contracts_status_is_up() {
        let resp = dispatch(&Method::GET, "/api/v1/contracts/health/status", &state());
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_contracts_detailed_is_up() {
        let resp = dispatch(&Method::GET, "/api/v1/contracts/health/detailed", &state());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_unknown_route_is_404() {
        let resp = dispatch(&Method::GET, "/nope", &state());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_down_health_maps_to_503() {
        let health = Health::down().with_detail("error", "probe failed");
        assert_eq!(status_for(&health), StatusCode::SERVICE_UNAVAILABLE);
    }
}
