//! Fetcher: one GET against the commit-listing endpoint, no retries.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{GhPulseError, Result};
use crate::model::RepoId;

const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";

/// Anything that can list one page of raw commit objects for a repository.
pub trait CommitSource {
    fn list_commits(&self, repo: &RepoId) -> Result<Vec<Value>>;
}

pub struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    token: Option<String>,
    per_page: u8,
}

fn make_agent(config: &Config) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(config.timeout))
        .build()
        .new_agent()
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: make_agent(config),
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            per_page: config.per_page,
        }
    }

    pub fn commits_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/commits", self.api_url, repo.owner, repo.repo)
    }
}

impl CommitSource for GitHubClient {
    fn list_commits(&self, repo: &RepoId) -> Result<Vec<Value>> {
        let url = self.commits_url(repo);
        let started = Instant::now();
        debug!(
            %url,
            per_page = self.per_page,
            authenticated = self.token.is_some(),
            "fetching commits"
        );

        let mut req = self
            .agent
            .get(&url)
            .query("per_page", self.per_page.to_string())
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", concat!("ghpulse/", env!("CARGO_PKG_VERSION")));

        if let Some(token) = &self.token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }

        let response = req.call().map_err(|e| {
            warn!(%url, error = %e, "request failed");
            GhPulseError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let reset = response
            .headers()
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(%url, status, elapsed_ms, "response received");

        check_status(status, reset.as_deref(), repo)?;

        let body: Value = response
            .into_body()
            .read_json()
            .map_err(|e| match e {
                ureq::Error::Timeout(_) | ureq::Error::Io(_) => {
                    GhPulseError::Transport(e.to_string())
                }
                other => GhPulseError::Decode(other.to_string()),
            })?;

        match body {
            Value::Array(items) => Ok(items),
            other => Err(GhPulseError::Decode(format!(
                "expected a JSON array of commits, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Maps an HTTP status to the fetch error taxonomy.
pub fn check_status(status: u16, ratelimit_reset: Option<&str>, repo: &RepoId) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        404 => Err(GhPulseError::NotFound {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
        }),
        403 | 429 => Err(GhPulseError::RateLimited {
            status,
            reset_at: ratelimit_reset.and_then(parse_reset),
        }),
        other => Err(GhPulseError::UnexpectedStatus(other)),
    }
}

fn parse_reset(raw: &str) -> Option<DateTime<Utc>> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
