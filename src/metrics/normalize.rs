use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{CommitRecord, CommitTable};

#[derive(Deserialize)]
struct RawCommit {
    sha: String,
    commit: RawCommitDetail,
    #[serde(default)]
    author: Option<RawAccount>,
}

#[derive(Deserialize)]
struct RawCommitDetail {
    author: RawSignature,
    message: String,
}

#[derive(Deserialize)]
struct RawSignature {
    name: String,
    date: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawAccount {
    #[serde(default)]
    login: Option<String>,
}

impl From<RawCommit> for CommitRecord {
    fn from(raw: RawCommit) -> Self {
        Self {
            sha: raw.sha,
            commit_date: raw.commit.author.date,
            author_name: raw.commit.author.name,
            author_login: raw.author.and_then(|a| a.login),
            message: raw.commit.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub table: CommitTable,
    pub skipped: usize,
}

/// Converts raw API objects into a `CommitTable`, keeping API order.
/// Records missing a required field are skipped and counted.
pub fn normalize(raw: Vec<Value>) -> Normalized {
    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = 0;

    for (idx, item) in raw.into_iter().enumerate() {
        match serde_json::from_value::<RawCommit>(item) {
            Ok(commit) => records.push(CommitRecord::from(commit)),
            Err(e) => {
                debug!(index = idx, error = %e, "skipping malformed commit record");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = records.len(), "skipped malformed commit records");
    }

    Normalized {
        table: CommitTable::new(records),
        skipped,
    }
}
