use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "roster.db")
    pub sqlite_path: String,
    /// Insert demo members into an empty database on startup (default: false)
    pub seed_demo_data: bool,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path, `:memory:` for a throwaway database (default: "roster.db")
    /// - `SEED_DEMO_DATA` - `true`/`1` to seed demo members (default: false)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "roster.db".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            sqlite_path: "test.db".to_string(),
            seed_demo_data: false,
            request_timeout_seconds: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("1"));
        assert!(parse_bool(" YES "));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("SEED_DEMO_DATA");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "roster.db");
        assert!(!config.seed_demo_data);
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
