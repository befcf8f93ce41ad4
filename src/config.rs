//! Process configuration loaded from environment variables.

use std::env;

/// Immutable application configuration, read once at startup and shared
/// by reference for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the Google Places upstream. Optional at startup; requests
    /// to the nearest-mosque endpoint fail with a client error when unset.
    pub google_maps_api_key: Option<String>,
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
}

impl AppConfig {
    /// Create a new configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `GOOGLE_MAPS_API_KEY` (optional): Places-search credential
    /// - `HOST` (optional, default: 0.0.0.0): Server bind host
    /// - `PORT` (optional, default: 8080): Server bind port
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let google_maps_api_key = env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        Ok(Self {
            google_maps_api_key,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_clone() {
        let config = AppConfig {
            google_maps_api_key: Some("test-key".to_string()),
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        let cloned = config.clone();
        assert_eq!(cloned.google_maps_api_key.as_deref(), Some("test-key"));
        assert_eq!(cloned.port, 9000);
    }

    // Single test for all env-var branches; splitting it would let the
    // parallel test runner race on the shared process environment.
    #[test]
    fn test_from_env() {
        env::remove_var("HOST");
        env::remove_var("PORT");

        // An empty credential is treated as unset.
        env::set_var("GOOGLE_MAPS_API_KEY", "");
        let config = AppConfig::from_env().unwrap();
        assert!(config.google_maps_api_key.is_none());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);

        env::set_var("GOOGLE_MAPS_API_KEY", "real-key");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.google_maps_api_key.as_deref(), Some("real-key"));
        env::remove_var("GOOGLE_MAPS_API_KEY");

        env::set_var("PORT", "not-a-port");
        assert!(AppConfig::from_env().is_err());
        env::remove_var("PORT");
    }
}
