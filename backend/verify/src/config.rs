use std::path::PathBuf;

/// Shared configuration for the verification scripts.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Frontend base URL (no trailing slash)
    pub base_url: String,
    /// Backend API base URL
    pub api_url: String,
    /// Seeded login email
    pub email: String,
    /// Seeded login password
    pub password: String,
    /// Directory screenshots are written to
    pub output_dir: PathBuf,
    /// Run the browser headless
    pub headless: bool,
    /// Log level
    pub log_level: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".to_string(),
            api_url: "http://localhost:5001/api".to_string(),
            email: "admin@test.com".to_string(),
            password: "123456".to_string(),
            output_dir: PathBuf::from("verification"),
            headless: true,
            log_level: "info".to_string(),
        }
    }
}

impl VerifyConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("VERIFY_BASE_URL").unwrap_or(defaults.base_url),
            api_url: std::env::var("VERIFY_API_URL").unwrap_or(defaults.api_url),
            email: std::env::var("VERIFY_EMAIL").unwrap_or(defaults.email),
            password: std::env::var("VERIFY_PASSWORD").unwrap_or(defaults.password),
            output_dir: std::env::var("VERIFY_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            headless: std::env::var("VERIFY_HEADLESS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.headless),
            log_level: std::env::var("VERIFY_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Absolute screenshot path under the output directory.
    pub fn shot(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}
