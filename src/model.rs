use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{GhPulseError, Result};
use crate::util::week_label;

pub const SCHEMA_VERSION: u32 = 1;

/// Largest page the commits endpoint will return.
pub const MAX_PER_PAGE: u8 = 100;

/// A validated `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        Ok(Self {
            owner: validate_segment("owner", owner)?,
            repo: validate_segment("repo", repo)?,
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = GhPulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, repo)) => RepoId::new(owner, repo),
            None => Err(GhPulseError::Input(format!(
                "expected owner/repo, got '{}'",
                s.trim()
            ))),
        }
    }
}

fn validate_segment(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GhPulseError::Input(format!("{field} must not be empty")));
    }
    if value.chars().all(|c| c == '.') {
        return Err(GhPulseError::Input(format!("{field} '{value}' is not a valid name")));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(GhPulseError::Input(format!(
            "{field} '{value}' contains invalid character '{bad}'"
        )));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit_date: DateTime<Utc>,
    pub author_name: String,
    pub author_login: Option<String>,
    pub message: String,
}

/// One page of commits in API order (most recent first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitTable {
    records: Vec<CommitRecord>,
}

impl CommitTable {
    pub fn new(records: Vec<CommitRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommitRecord> {
        self.records.iter()
    }

    /// Earliest and latest `commit_date`, or `None` for an empty table.
    pub fn date_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let min = self.records.iter().map(|r| r.commit_date).min()?;
        let max = self.records.iter().map(|r| r.commit_date).max()?;
        Some((min, max))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekCount {
    pub week_start: NaiveDate,
    pub count: usize,
}

impl WeekCount {
    pub fn label(&self) -> String {
        week_label(self.week_start)
    }
}

/// Contributor bucket. Commits without a linked account share `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthorKey {
    Login(String),
    Unknown,
}

impl AuthorKey {
    pub fn from_login(login: Option<&str>) -> Self {
        match login {
            Some(login) => AuthorKey::Login(login.to_string()),
            None => AuthorKey::Unknown,
        }
    }
}

impl fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorKey::Login(login) => f.write_str(login),
            AuthorKey::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for AuthorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Commit counts per author, descending; ties keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorCounts {
    entries: Vec<(AuthorKey, usize)>,
}

impl AuthorCounts {
    pub(crate) fn from_sorted(entries: Vec<(AuthorKey, usize)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(AuthorKey, usize)] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[(AuthorKey, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn max(&self) -> usize {
        self.entries.first().map(|(_, count)| *count).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_commits: usize,
    pub unique_authors: usize,
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub top_author_share: f64,
}

impl Default for SummaryMetrics {
    fn default() -> Self {
        Self {
            total_commits: 0,
            unique_authors: 0,
            date_range: None,
            top_author_share: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoMetrics {
    pub weekly: Vec<WeekCount>,
    pub authors: AuthorCounts,
    pub summary: SummaryMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorEntry {
    pub author: AuthorKey,
    pub commits: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekEntry {
    pub week: String,
    pub week_start: NaiveDate,
    pub commit_count: usize,
}

impl From<&WeekCount> for WeekEntry {
    fn from(w: &WeekCount) -> Self {
        Self {
            week: w.label(),
            week_start: w.week_start,
            commit_count: w.count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub per_page: u8,
    pub summary: SummaryMetrics,
    pub weekly: Vec<WeekEntry>,
    pub top_authors: Vec<AuthorEntry>,
    pub skipped_records: usize,
}
