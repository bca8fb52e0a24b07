use anyhow::Result;
use chrono::Utc;
use console::style;
use serde_json::json;
use std::io::Write;

use crate::model::{AuthorEntry, ReportOutput, WeekEntry, SCHEMA_VERSION};
use crate::pipeline::Loaded;

pub const EMPTY_RESULT: &str = "No commit data returned (empty result).";

pub fn build_report(loaded: &Loaded, per_page: u8, top: usize) -> ReportOutput {
    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: loaded.repo.to_string(),
        per_page,
        summary: loaded.metrics.summary.clone(),
        weekly: loaded.metrics.weekly.iter().map(WeekEntry::from).collect(),
        top_authors: loaded
            .metrics
            .authors
            .top(top)
            .iter()
            .map(|(author, commits)| AuthorEntry {
                author: author.clone(),
                commits: *commits,
            })
            .collect(),
        skipped_records: loaded.skipped,
    }
}

pub fn write_json(out: &mut dyn Write, loaded: &Loaded, per_page: u8, top: usize) -> Result<()> {
    let report = build_report(loaded, per_page, top);
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

pub fn write_ndjson(out: &mut dyn Write, loaded: &Loaded, top: usize) -> Result<()> {
    for week in &loaded.metrics.weekly {
        let line = json!({
            "kind": "week",
            "week": week.label(),
            "week_start": week.week_start,
            "commit_count": week.count,
        });
        writeln!(out, "{line}")?;
    }
    for (author, commits) in loaded.metrics.authors.top(top) {
        let line = json!({ "kind": "author", "author": author, "commits": commits });
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn write_text(out: &mut dyn Write, loaded: &Loaded, top: usize) -> Result<()> {
    let metrics = &loaded.metrics;

    writeln!(out, "{}", style(format!("Commit activity for {}", loaded.repo)).bold())?;
    writeln!(out, "{}", "─".repeat(50))?;

    if loaded.is_empty() {
        writeln!(out, "{}", style(EMPTY_RESULT).yellow())?;
        return Ok(());
    }

    let summary = &metrics.summary;
    let range = summary
        .date_range
        .map(|(min, max)| format!("{} → {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d")))
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "Total commits:    {}", style(summary.total_commits).green())?;
    writeln!(out, "Unique authors:   {}", style(summary.unique_authors).cyan())?;
    writeln!(out, "Date range:       {range}")?;
    writeln!(
        out,
        "Top author share: {}",
        style(format!("{:.1}%", summary.top_author_share * 100.0)).magenta()
    )?;
    if loaded.skipped > 0 {
        writeln!(out, "{}", style(format!("Skipped {} malformed records", loaded.skipped)).dim())?;
    }

    writeln!(out, "\n{}", style("Commits per week").bold())?;
    let max_week = metrics.weekly.iter().map(|w| w.count).max().unwrap_or(1).max(1);
    for week in &metrics.weekly {
        let bar = "█".repeat((week.count * 30).div_ceil(max_week));
        writeln!(
            out,
            "{} ({}) {:>3} {}",
            week.label(),
            week.week_start,
            week.count,
            style(bar).green()
        )?;
    }

    writeln!(out, "\n{}", style("Top contributors").bold())?;
    let max_author = metrics.authors.max().max(1);
    for (rank, (author, commits)) in metrics.authors.top(top).iter().enumerate() {
        let bar = "█".repeat((commits * 30).div_ceil(max_author));
        writeln!(
            out,
            "{:>2}. {:<24} {:>3} {}",
            rank + 1,
            author.to_string(),
            commits,
            style(bar).blue()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use crate::model::{CommitRecord, CommitTable, RepoId};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn loaded(records: Vec<CommitRecord>) -> Loaded {
        let table = CommitTable::new(records);
        Loaded {
            repo: RepoId::new("plotly", "dash").unwrap(),
            metrics: compute_metrics(&table),
            table,
            skipped: 0,
            fetched_at: Utc::now(),
        }
    }

    fn rec(day: u32, login: Option<&str>) -> CommitRecord {
        CommitRecord {
            sha: format!("{day:040}"),
            commit_date: Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap(),
            author_name: "n".into(),
            author_login: login.map(str::to_string),
            message: "m".into(),
        }
    }

    #[test]
    fn json_report_has_versioned_envelope() {
        let l = loaded(vec![rec(20, Some("alice")), rec(6, None), rec(7, Some("alice"))]);
        let mut buf = Vec::new();
        write_json(&mut buf, &l, 100, 10).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(v["version"], 1);
        assert_eq!(v["repository"], "plotly/dash");
        assert_eq!(v["summary"]["total_commits"], 3);
        assert_eq!(v["weekly"].as_array().unwrap().len(), 3);
        assert_eq!(v["weekly"][1]["commit_count"], 0);
        assert_eq!(v["top_authors"][0]["author"], "alice");
        assert_eq!(v["top_authors"][1]["author"], "unknown");
    }

    #[test]
    fn ndjson_emits_one_line_per_week_and_author() {
        let l = loaded(vec![rec(6, Some("a")), rec(7, Some("b"))]);
        let mut buf = Vec::new();
        write_ndjson(&mut buf, &l, 1).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let kinds: Vec<String> = text
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["kind"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["week", "author"]);
    }

    #[test]
    fn text_report_shows_empty_state() {
        console::set_colors_enabled(false);
        let l = loaded(Vec::new());
        let mut buf = Vec::new();
        write_text(&mut buf, &l, 10).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(EMPTY_RESULT));
        assert!(!text.contains("Top contributors"));
    }

    #[test]
    fn text_report_lists_summary() {
        console::set_colors_enabled(false);
        let l = loaded(vec![rec(6, Some("alice")), rec(7, Some("bob")), rec(8, Some("alice"))]);
        let mut buf = Vec::new();
        write_text(&mut buf, &l, 10).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total commits:    3"));
        assert!(text.contains("Top author share: 66.7%"));
        assert!(text.contains("2024-W19"));
        assert!(text.contains(" 1. alice"));
    }
}
