//! Environment configuration for the job-board API client.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("JOBBOARD_API_URL").ok(),
            std::env::var("JOBBOARD_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL.to_string());
        let timeout_secs = match timeout_secs {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!("JOBBOARD_API_TIMEOUT_SECS={raw:?} is not a number, using {DEFAULT_TIMEOUT_SECS}");
                DEFAULT_TIMEOUT_SECS
            }),
        };
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn trims_trailing_slash_and_parses_timeout() {
        let config = ApiConfig::from_values(Some("https://api.example.org/v1/".to_string()), Some(" 30 ".to_string()));
        assert_eq!(config.base_url, "https://api.example.org/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn bad_timeout_falls_back() {
        let config = ApiConfig::from_values(Some("".to_string()), Some("soon".to_string()));
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
