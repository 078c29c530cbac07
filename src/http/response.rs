//! HTTP response building module
//!
//! Builders for the status codes this server emits. Builder failures are
//! logged and degrade to a minimal response instead of propagating.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::views::Page;

/// Build a response from a rendered page.
///
/// `HEAD` responses keep the headers and `Content-Length` of the full
/// response and drop the body.
pub fn build_page_response(page: &Page, server_name: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = page.body.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page.body.clone())
    };

    Response::builder()
        .status(page.status)
        .header("Content-Type", page.content_type)
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("page", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;

    #[test]
    fn test_page_response_carries_page_fields() {
        let page = views::not_found();
        let resp = build_page_response(&page, "likha-server/0.1", false);
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "14");
        assert_eq!(resp.headers().get("Server").unwrap(), "likha-server/0.1");
    }

    #[test]
    fn test_head_response_keeps_content_length() {
        let page = views::landing();
        let resp = build_page_response(&page, "likha-server/0.1", true);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Length").unwrap(),
            &page.body.len().to_string()
        );
    }

    #[test]
    fn test_405_lists_allowed_methods() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_options_cors_headers_only_when_enabled() {
        let plain = build_options_response(false);
        assert_eq!(plain.status(), 204);
        assert!(plain.headers().get("Access-Control-Allow-Origin").is_none());

        let cors = build_options_response(true);
        assert_eq!(
            cors.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }
}
