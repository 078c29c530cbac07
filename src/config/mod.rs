// Configuration module entry point
// Manages application configuration loading and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension).
    ///
    /// The file is optional; `LIKHA_`-prefixed environment variables override
    /// it, and coded defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("LIKHA"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.mgmt_host", "127.0.0.1")?
            .set_default("server.mgmt_port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "likha-server/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn get_mgmt_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.mgmt_host, self.server.mgmt_port)
            .parse()
            .map_err(|e| format!("Invalid management address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.mgmt_port, 8000);
        assert!(config.server.workers.is_none());
        assert!(config.logging.access_log);
        assert_eq!(config.logging.access_log_format, "combined");
        assert!(config.performance.max_connections.is_none());
        assert_eq!(config.http.max_body_size, 10_485_760);
        assert!(!config.http.enable_cors);
    }

    #[test]
    fn test_socket_addrs_parse() {
        let config = Config::load_from("no-such-config-file").unwrap();
        assert!(config.get_socket_addr().is_ok());
        assert!(config.get_mgmt_socket_addr().is_ok());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut config = Config::load_from("no-such-config-file").unwrap();
        config.server.host = "not a host".to_string();
        assert!(config.get_socket_addr().is_err());
    }
}
