use anyhow::Context;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::output::EMPTY_RESULT;
use super::{write_json, write_ndjson, write_text, OutputFormat};
use crate::config::Config;
use crate::fetch::GitHubClient;
use crate::model::RepoId;
use crate::pipeline::load;

pub fn exec(
    config: &Config,
    owner: &str,
    repo: &str,
    format: OutputFormat,
    top: usize,
) -> anyhow::Result<()> {
    let repo = RepoId::new(owner, repo).context("Invalid repository")?;
    let client = GitHubClient::new(config);

    // Spinner only for interactive text output; JSON consumers get a clean stream.
    let spinner = (format == OutputFormat::Text && Term::stderr().is_term()).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching commits for {repo}..."));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = load(&client, &repo);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let loaded = result.with_context(|| format!("Failed to load commits for {repo}"))?;

    // Text output carries the warning inline; machine formats keep stdout clean.
    if loaded.is_empty() && format != OutputFormat::Text {
        eprintln!("{}", style(EMPTY_RESULT).yellow());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => write_json(&mut out, &loaded, config.per_page, top)?,
        OutputFormat::Ndjson => write_ndjson(&mut out, &loaded, top)?,
        OutputFormat::Text => write_text(&mut out, &loaded, top)?,
    }
    out.flush()?;

    Ok(())
}
