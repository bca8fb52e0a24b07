use chrono::{DateTime, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhPulseError>;

#[derive(Error, Debug)]
pub enum GhPulseError {
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Repository {owner}/{repo} not found (it may not exist or may be private)")]
    NotFound { owner: String, repo: String },
    #[error("GitHub API rate limit exceeded (status {status}){}", reset_hint(.reset_at))]
    RateLimited {
        status: u16,
        reset_at: Option<DateTime<Utc>>,
    },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("GitHub API error (status {0})")]
    UnexpectedStatus(u16),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GhPulseError {
    /// Short hint shown under the error message in the dashboard.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            GhPulseError::Input(_) => Some("Please enter both owner and repo."),
            GhPulseError::NotFound { .. } | GhPulseError::UnexpectedStatus(_) => {
                Some("Check that the repository exists and is public.")
            }
            GhPulseError::RateLimited { .. } => {
                Some("Set GITHUB_TOKEN to raise the request quota.")
            }
            GhPulseError::Transport(_) => Some("Check your network connection and try again."),
            _ => None,
        }
    }
}

fn reset_hint(reset_at: &Option<DateTime<Utc>>) -> String {
    match reset_at {
        Some(at) => {
            let wait = (*at - Utc::now()).to_std().unwrap_or_default();
            let wait = std::time::Duration::from_secs(wait.as_secs());
            format!(", resets in {}", humantime::format_duration(wait))
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_without_reset() {
        let err = GhPulseError::RateLimited {
            status: 403,
            reset_at: None,
        };
        assert_eq!(err.to_string(), "GitHub API rate limit exceeded (status 403)");
    }

    #[test]
    fn rate_limit_message_with_past_reset_clamps_to_zero() {
        let err = GhPulseError::RateLimited {
            status: 429,
            reset_at: Some(Utc::now() - chrono::Duration::minutes(5)),
        };
        assert!(err.to_string().ends_with("resets in 0s"));
    }

    #[test]
    fn input_error_has_hint() {
        let err = GhPulseError::Input("owner must not be empty".into());
        assert_eq!(err.hint(), Some("Please enter both owner and repo."));
    }
}
