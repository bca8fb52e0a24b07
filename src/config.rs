use std::time::Duration;

use crate::model::MAX_PER_PAGE;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-wide settings, fixed at startup.
#[derive(Clone)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
    pub per_page: u8,
}

impl Config {
    pub fn new(
        token: Option<String>,
        api_url: Option<String>,
        timeout: Option<Duration>,
        per_page: Option<u8>,
    ) -> Self {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let api_url = api_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            token,
            api_url,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            per_page: per_page.unwrap_or(MAX_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

// Keeps the token out of debug output and logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("per_page", &self.per_page)
            .finish()
    }
}
