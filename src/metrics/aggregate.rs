use chrono::Duration;
use std::collections::HashMap;

use crate::model::{AuthorCounts, AuthorKey, CommitTable, RepoMetrics, SummaryMetrics, WeekCount};
use crate::util::week_start;

/// Commits per Monday-starting ISO week, zero-filled across the whole
/// range between the earliest and latest commit, ascending.
pub fn weekly_counts(table: &CommitTable) -> Vec<WeekCount> {
    let Some((min, max)) = table.date_range() else {
        return Vec::new();
    };

    let mut per_week: HashMap<_, usize> = HashMap::new();
    for record in table.iter() {
        *per_week.entry(week_start(&record.commit_date)).or_insert(0) += 1;
    }

    let last = week_start(&max);
    let mut week = week_start(&min);
    let mut weeks = Vec::new();
    while week <= last {
        weeks.push(WeekCount {
            week_start: week,
            count: per_week.get(&week).copied().unwrap_or(0),
        });
        week += Duration::days(7);
    }
    weeks
}

pub fn author_counts(table: &CommitTable) -> AuthorCounts {
    let mut order: Vec<(AuthorKey, usize)> = Vec::new();
    let mut index: HashMap<AuthorKey, usize> = HashMap::new();

    for record in table.iter() {
        let key = AuthorKey::from_login(record.author_login.as_deref());
        match index.get(&key) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(key.clone(), order.len());
                order.push((key, 1));
            }
        }
    }

    // stable: equal counts stay in first-appearance order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    AuthorCounts::from_sorted(order)
}

pub fn summarize(table: &CommitTable, authors: &AuthorCounts) -> SummaryMetrics {
    let total_commits = table.len();
    if total_commits == 0 {
        return SummaryMetrics::default();
    }

    SummaryMetrics {
        total_commits,
        unique_authors: authors.unique(),
        date_range: table.date_range(),
        top_author_share: authors.max() as f64 / total_commits as f64,
    }
}

pub fn compute_metrics(table: &CommitTable) -> RepoMetrics {
    let authors = author_counts(table);
    let summary = summarize(table, &authors);
    RepoMetrics {
        weekly: weekly_counts(table),
        authors,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitRecord;
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn rec(n: usize, y: i32, m: u32, d: u32, login: Option<&str>) -> CommitRecord {
        CommitRecord {
            sha: format!("{n:040x}"),
            commit_date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            author_name: login.unwrap_or("Anonymous").to_string(),
            author_login: login.map(str::to_string),
            message: format!("commit {n}"),
        }
    }

    fn login(s: &str) -> AuthorKey {
        AuthorKey::Login(s.to_string())
    }

    #[test]
    fn three_commits_two_authors_same_week() {
        let table = CommitTable::new(vec![
            rec(1, 2024, 3, 13, Some("alice")),
            rec(2, 2024, 3, 12, Some("bob")),
            rec(3, 2024, 3, 11, Some("alice")),
        ]);
        let m = compute_metrics(&table);

        assert_eq!(
            m.weekly,
            vec![WeekCount {
                week_start: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                count: 3
            }]
        );
        assert_eq!(m.authors.entries(), &[(login("alice"), 2), (login("bob"), 1)]);
        assert_eq!(m.summary.total_commits, 3);
        assert_eq!(m.summary.unique_authors, 2);
        assert!((m.summary.top_author_share - 0.667).abs() < 0.001);
    }

    #[test]
    fn empty_table_yields_empty_metrics() {
        let m = compute_metrics(&CommitTable::default());
        assert!(m.weekly.is_empty());
        assert_eq!(m.authors.unique(), 0);
        assert_eq!(m.summary, SummaryMetrics::default());
        assert_eq!(m.summary.top_author_share, 0.0);
    }

    #[test]
    fn weekly_counts_fill_gaps_with_zero() {
        let table = CommitTable::new(vec![
            rec(1, 2024, 4, 3, Some("alice")),
            rec(2, 2024, 3, 5, Some("alice")),
            rec(3, 2024, 3, 4, Some("bob")),
        ]);
        let weeks = weekly_counts(&table);

        let counts: Vec<usize> = weeks.iter().map(|w| w.count).collect();
        assert_eq!(counts, vec![2, 0, 0, 0, 1]);
        assert_eq!(weeks[0].week_start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].week_start - pair[0].week_start, Duration::days(7));
        }
    }

    #[test]
    fn weekly_counts_span_year_boundary() {
        let table = CommitTable::new(vec![
            rec(1, 2025, 1, 6, Some("a")),
            rec(2, 2024, 12, 29, Some("a")),
        ]);
        let weeks = weekly_counts(&table);
        let labels: Vec<String> = weeks.iter().map(|w| w.label()).collect();
        assert_eq!(labels, vec!["2024-W52", "2025-W01", "2025-W02"]);
        assert_eq!(weeks.iter().map(|w| w.count).sum::<usize>(), 2);
    }

    #[test]
    fn unknown_authors_coalesce_and_ties_keep_first_appearance() {
        let table = CommitTable::new(vec![
            rec(1, 2024, 3, 13, Some("carol")),
            rec(2, 2024, 3, 12, None),
            rec(3, 2024, 3, 11, Some("dave")),
            rec(4, 2024, 3, 10, None),
            rec(5, 2024, 3, 9, Some("dave")),
            rec(6, 2024, 3, 8, Some("erin")),
        ]);
        let authors = author_counts(&table);
        assert_eq!(
            authors.entries(),
            &[
                (AuthorKey::Unknown, 2),
                (login("dave"), 2),
                (login("carol"), 1),
                (login("erin"), 1),
            ]
        );
        assert_eq!(authors.total(), table.len());
    }

    #[test]
    fn share_and_unique_count_use_all_authors_not_just_top() {
        let mut records = vec![rec(0, 2024, 1, 1, Some("lead")), rec(1, 2024, 1, 1, Some("lead"))];
        for n in 0..12 {
            records.push(rec(100 + n, 2024, 1, 2, Some(format!("dev{n}").as_str())));
        }
        let table = CommitTable::new(records);
        let m = compute_metrics(&table);

        assert_eq!(m.authors.top(10).len(), 10);
        assert_eq!(m.authors.top(10)[0], (login("lead"), 2));
        assert_eq!(m.summary.unique_authors, 13);
        assert!((m.summary.top_author_share - 2.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn single_author_owns_everything() {
        let table = CommitTable::new(vec![
            rec(1, 2024, 5, 1, Some("solo")),
            rec(2, 2024, 2, 1, Some("solo")),
        ]);
        let m = compute_metrics(&table);
        assert_eq!(m.summary.unique_authors, 1);
        assert_eq!(m.summary.top_author_share, 1.0);
    }

    #[test]
    fn aggregation_is_idempotent_and_conserves_counts() {
        let table = CommitTable::new(
            (0..40)
                .map(|n| {
                    let login = match n % 4 {
                        0 => None,
                        1 => Some("x"),
                        _ => Some("y"),
                    };
                    rec(n, 2024, 1 + (n as u32 % 6), 1 + (n as u32 % 27), login)
                })
                .collect(),
        );
        let first = compute_metrics(&table);
        let second = compute_metrics(&table);
        assert_eq!(first, second);

        assert_eq!(first.authors.total(), table.len());
        assert_eq!(first.weekly.iter().map(|w| w.count).sum::<usize>(), table.len());
        assert!((0.0..=1.0).contains(&first.summary.top_author_share));
    }
}
