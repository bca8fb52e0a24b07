use crate::error::{GhPulseError, Result};
use crate::fetch::CommitSource;
use crate::model::RepoId;
use crate::pipeline::{load, Loaded};

pub const DEFAULT_OWNER: &str = "pandas-dev";
pub const DEFAULT_REPO: &str = "pandas";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Owner,
    Repo,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Owner => Field::Repo,
            Field::Repo => Field::Owner,
        }
    }
}

/// What the chart area currently shows. Each load replaces it wholesale.
#[derive(Debug)]
pub enum LoadOutcome {
    Idle,
    Loading(RepoId),
    Loaded(Box<Loaded>),
    Empty(Box<Loaded>),
    Failed {
        message: String,
        hint: Option<&'static str>,
    },
}

pub struct DashboardState {
    pub owner: String,
    pub repo: String,
    pub focus: Field,
    pub outcome: LoadOutcome,
    pub show_help: bool,
    pub top_authors: usize,
}

impl DashboardState {
    pub fn new(owner: Option<&str>, repo: Option<&str>, top_authors: usize) -> Self {
        Self {
            owner: owner.unwrap_or(DEFAULT_OWNER).to_string(),
            repo: repo.unwrap_or(DEFAULT_REPO).to_string(),
            focus: Field::Owner,
            outcome: LoadOutcome::Idle,
            show_help: false,
            top_authors,
        }
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Owner => &mut self.owner,
            Field::Repo => &mut self.repo,
        }
    }

    /// Validates the inputs. On success the outcome becomes `Loading`.
    pub fn begin_load(&mut self) -> Option<RepoId> {
        match RepoId::new(&self.owner, &self.repo) {
            Ok(repo) => {
                self.outcome = LoadOutcome::Loading(repo.clone());
                Some(repo)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    pub fn finish_load(&mut self, result: Result<Loaded>) {
        self.outcome = match result {
            Ok(loaded) if loaded.is_empty() => LoadOutcome::Empty(Box::new(loaded)),
            Ok(loaded) => LoadOutcome::Loaded(Box::new(loaded)),
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                LoadOutcome::Failed {
                    message: e.to_string(),
                    hint: e.hint(),
                }
            }
        };
    }

    /// Runs one full cycle synchronously.
    pub fn submit(&mut self, source: &dyn CommitSource) {
        if let Some(repo) = self.begin_load() {
            let result = load(source, &repo);
            self.finish_load(result);
        }
    }

    fn fail(&mut self, e: &GhPulseError) {
        self.outcome = LoadOutcome::Failed {
            message: e.to_string(),
            hint: e.hint(),
        };
    }

    pub fn status_line(&self) -> String {
        match &self.outcome {
            LoadOutcome::Idle => "Enter an owner and repo, then press Enter to load.".to_string(),
            LoadOutcome::Loading(repo) => format!("Loading commits for {repo}…"),
            LoadOutcome::Loaded(l) => {
                let mut s = format!(
                    "Loaded {} commits for {} at {}",
                    l.table.len(),
                    l.repo,
                    l.fetched_at.format("%H:%M:%S UTC")
                );
                if l.skipped > 0 {
                    s.push_str(&format!(" ({} malformed skipped)", l.skipped));
                }
                s
            }
            LoadOutcome::Empty(_) => crate::report::output::EMPTY_RESULT.to_string(),
            LoadOutcome::Failed { message, .. } => message.clone(),
        }
    }
}
