use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::fetch::CommitSource;
use crate::metrics::{compute_metrics, normalize};
use crate::model::{CommitTable, RepoId, RepoMetrics};

/// Result of one fetch → normalize → aggregate cycle.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub repo: RepoId,
    pub table: CommitTable,
    pub metrics: RepoMetrics,
    pub skipped: usize,
    pub fetched_at: DateTime<Utc>,
}

impl Loaded {
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

pub fn load(source: &dyn CommitSource, repo: &RepoId) -> Result<Loaded> {
    let raw = source.list_commits(repo)?;
    let fetched = raw.len();
    let normalized = normalize(raw);
    let metrics = compute_metrics(&normalized.table);

    info!(
        repo = %repo,
        fetched,
        kept = normalized.table.len(),
        weeks = metrics.weekly.len(),
        authors = metrics.summary.unique_authors,
        "loaded commit metrics"
    );

    Ok(Loaded {
        repo: repo.clone(),
        table: normalized.table,
        metrics,
        skipped: normalized.skipped,
        fetched_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GhPulseError;
    use serde_json::{json, Value};

    struct Canned(Vec<Value>);

    impl CommitSource for Canned {
        fn list_commits(&self, _repo: &RepoId) -> Result<Vec<Value>> {
            Ok(self.0.clone())
        }
    }

    struct Missing;

    impl CommitSource for Missing {
        fn list_commits(&self, repo: &RepoId) -> Result<Vec<Value>> {
            Err(GhPulseError::NotFound {
                owner: repo.owner.clone(),
                repo: repo.repo.clone(),
            })
        }
    }

    #[test]
    fn load_runs_whole_pipeline() {
        let source = Canned(vec![
            json!({
                "sha": "1".repeat(40),
                "commit": { "author": { "name": "A", "date": "2024-06-05T08:00:00Z" }, "message": "m" },
                "author": { "login": "alice" }
            }),
            json!({ "sha": "broken" }),
        ]);
        let repo = RepoId::new("o", "r").unwrap();
        let loaded = load(&source, &repo).unwrap();

        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.metrics.summary.total_commits, 1);
        assert_eq!(loaded.metrics.weekly.len(), 1);
        assert!(!loaded.is_empty());
    }

    #[test]
    fn load_propagates_fetch_errors() {
        let repo = RepoId::new("o", "r").unwrap();
        assert!(matches!(load(&Missing, &repo), Err(GhPulseError::NotFound { .. })));
    }

    #[test]
    fn empty_page_is_not_an_error() {
        let repo = RepoId::new("o", "r").unwrap();
        let loaded = load(&Canned(Vec::new()), &repo).unwrap();
        assert!(loaded.is_empty());
        assert!(loaded.metrics.weekly.is_empty());
    }
}
