//! Request routing dispatch module
//!
//! Entry point for application requests: validates the method, resolves the
//! path against the route table, and renders the selected view.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry, AccessLogFormat};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for application request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(req.method(), state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check declared body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Resolve path and render the selected view
    let is_head = *req.method() == Method::HEAD;
    let path = req.uri().path();
    let page = (state.routes.resolve(path))();
    let response = http::build_page_response(&page, &state.config.http.server_name, is_head);

    // 4. Access log
    if state.cached_access_log.load(Ordering::Relaxed) {
        let body_bytes = if is_head { 0 } else { page.body.len() };
        let entry = access_entry(&req, peer_addr, page.status, body_bytes, &started);
        let format = AccessLogFormat::parse(&state.config.logging.access_log_format);
        logger::log_access(&entry, format);
    }

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods.
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    if *method == Method::GET || *method == Method::HEAD {
        None
    } else if *method == Method::OPTIONS {
        Some(http::build_options_response(enable_cors))
    } else {
        logger::log_warning(&format!("Method not allowed: {method}"));
        Some(http::build_405_response())
    }
}

/// Validate a declared Content-Length and return 413 if exceeded.
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Build the access log entry for a finished request.
fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    status: u16,
    body_bytes: usize,
    started: &Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = http_version_label(req.version()).to_string();
    entry.status = status;
    entry.body_bytes = body_bytes;
    entry.referer = header_str(req, "referer");
    entry.user_agent = header_str(req, "user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn header_str<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn http_version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, path: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .unwrap()
    }

    #[test]
    fn test_get_and_head_pass_method_check() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());
    }

    #[test]
    fn test_options_gets_preflight() {
        let resp = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(resp.status(), 204);
    }

    #[test]
    fn test_other_methods_get_405() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let resp = check_http_method(&method, false).unwrap();
            assert_eq!(resp.status(), 405);
        }
    }

    #[test]
    fn test_body_size_check() {
        let mut req = request(Method::GET, "/");
        assert!(check_body_size(&req, 1024).is_none());

        req.headers_mut()
            .insert("content-length", "512".parse().unwrap());
        assert!(check_body_size(&req, 1024).is_none());

        req.headers_mut()
            .insert("content-length", "2048".parse().unwrap());
        let resp = check_body_size(&req, 1024).unwrap();
        assert_eq!(resp.status(), 413);
    }

    #[test]
    fn test_malformed_content_length_is_ignored() {
        let mut req = request(Method::GET, "/");
        req.headers_mut()
            .insert("content-length", "abc".parse().unwrap());
        assert!(check_body_size(&req, 1024).is_none());
    }

    #[test]
    fn test_access_entry_captures_request_line() {
        let mut req = request(Method::GET, "/pricing?plan=team");
        req.headers_mut()
            .insert("user-agent", "curl/8.0".parse().unwrap());
        let peer: SocketAddr = "10.1.2.3:55000".parse().unwrap();

        let entry = access_entry(&req, peer, 404, 14, &Instant::now());
        assert_eq!(entry.remote_addr, "10.1.2.3");
        assert_eq!(entry.method, "GET");
        assert_eq!(entry.path, "/pricing");
        assert_eq!(entry.query.as_deref(), Some("plan=team"));
        assert_eq!(entry.status, 404);
        assert_eq!(entry.body_bytes, 14);
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
    }
}
