//! Access log formats
//!
//! Supported formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format)
//! - `json` (structured logging)

use chrono::Local;

/// Access log output format, parsed from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLogFormat {
    Combined,
    Common,
    Json,
}

impl AccessLogFormat {
    /// Parse a configured format name. Unknown names fall back to `combined`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "common" => Self::Common,
            "json" => Self::Json,
            _ => Self::Combined,
        }
    }
}

/// One access log entry covering a single request/response pair.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Request processing time in microseconds.
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// New entry stamped with the current local time.
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Render the entry in the given format.
    #[must_use]
    pub fn format(&self, format: AccessLogFormat) -> String {
        match format {
            AccessLogFormat::Combined => self.format_combined(),
            AccessLogFormat::Common => self.format_common(),
            AccessLogFormat::Json => self.format_json(),
        }
    }

    /// Request line as it appears in quoted log fields.
    fn request_line(&self) -> String {
        let query = self
            .query
            .as_ref()
            .map(|q| format!("?{q}"))
            .unwrap_or_default();
        format!(
            "{} {}{} HTTP/{}",
            self.method, self.path, query, self.http_version
        )
    }

    /// `$remote_addr - - [$time_local] "$request" $status $bytes "$referer" "$user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// `$remote_addr - - [$time_local] "$request" $status $bytes`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/pricing".to_string(),
        );
        entry.query = Some("plan=team".to_string());
        entry.status = 404;
        entry.body_bytes = 14;
        entry.referer = Some("https://example.com".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.request_time_us = 1500;
        entry
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!(AccessLogFormat::parse("combined"), AccessLogFormat::Combined);
        assert_eq!(AccessLogFormat::parse("common"), AccessLogFormat::Common);
        assert_eq!(AccessLogFormat::parse("json"), AccessLogFormat::Json);
        assert_eq!(AccessLogFormat::parse("bogus"), AccessLogFormat::Combined);
    }

    #[test]
    fn test_format_combined() {
        let entry = create_test_entry();
        let log = entry.format(AccessLogFormat::Combined);
        assert!(log.contains("192.168.1.1"));
        assert!(log.contains("GET /pricing?plan=team HTTP/1.1"));
        assert!(log.contains("404 14"));
        assert!(log.contains("https://example.com"));
        assert!(log.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_common_has_no_agent_fields() {
        let entry = create_test_entry();
        let log = entry.format(AccessLogFormat::Common);
        assert!(log.contains("GET /pricing?plan=team HTTP/1.1"));
        assert!(log.contains("404 14"));
        assert!(!log.contains("https://example.com"));
        assert!(!log.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_json() {
        let entry = create_test_entry();
        let log = entry.format(AccessLogFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.1");
        assert_eq!(value["method"], "GET");
        assert_eq!(value["status"], 404);
        assert_eq!(value["body_bytes"], 14);
        assert_eq!(value["query"], "plan=team");
    }

    #[test]
    fn test_missing_optional_fields_render_as_dash() {
        let entry = AccessLogEntry::new(
            "10.0.0.1".to_string(),
            "HEAD".to_string(),
            "/".to_string(),
        );
        let log = entry.format(AccessLogFormat::Combined);
        assert!(log.contains("\"HEAD / HTTP/1.1\""));
        assert!(log.ends_with("\"-\" \"-\""));
    }
}
