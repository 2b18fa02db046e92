//! Runtime configuration.

/// Environment variable overriding the optimization endpoint.
pub const ENDPOINT_ENV: &str = "BOS_ENDPOINT";

/// Endpoint used when no override is present.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/optimize";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the optimization service.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(Config::default().endpoint, "http://127.0.0.1:5000/optimize");
    }
}
