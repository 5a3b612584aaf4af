use serde::Deserialize;

/// OCR service runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: std::env::var("OCR_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: std::env::var("OCR_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("OCR_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("OCR_LOG_DIR").unwrap_or(defaults.log_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_contract() {
        let config = Config::default();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }
}
