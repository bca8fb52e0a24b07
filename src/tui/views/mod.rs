use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

mod activity;
mod contributors;
mod help;
mod inputs;
mod message;
mod summary;

pub use activity::draw_activity_chart;
pub use contributors::draw_contributors_chart;
pub use help::draw_help_overlay;
pub use inputs::draw_inputs;
pub use message::{draw_message, draw_placeholder};
pub use summary::draw_summary_cards;

use super::layout::dashboard_areas;
use super::state::{DashboardState, LoadOutcome};

/// Render the full dashboard for the current state.
pub fn draw_dashboard(f: &mut Frame, state: &DashboardState) {
    let size = f.size();
    let areas = dashboard_areas(size);

    draw_inputs(f, areas.inputs, state);
    draw_status(f, areas.status, state);

    let charts = Rect {
        height: areas.activity.height + areas.contributors.height,
        ..areas.activity
    };

    match &state.outcome {
        LoadOutcome::Loaded(loaded) => {
            draw_summary_cards(f, areas.cards, Some(&loaded.metrics.summary));
            draw_activity_chart(f, areas.activity, loaded);
            draw_contributors_chart(
                f,
                areas.contributors,
                &loaded.metrics.authors,
                state.top_authors,
            );
        }
        LoadOutcome::Empty(loaded) => {
            draw_summary_cards(f, areas.cards, Some(&loaded.metrics.summary));
            draw_placeholder(f, areas.activity, "Commits per week");
            draw_placeholder(f, areas.contributors, "Top contributors");
        }
        LoadOutcome::Failed { message, hint } => {
            draw_summary_cards(f, areas.cards, None);
            draw_message(f, charts, "Error", message, *hint, Color::Red);
        }
        LoadOutcome::Loading(repo) => {
            draw_summary_cards(f, areas.cards, None);
            let message = format!("Fetching commits for {repo}…");
            draw_message(f, charts, "Loading", &message, None, Color::Yellow);
        }
        LoadOutcome::Idle => {
            draw_summary_cards(f, areas.cards, None);
            draw_message(
                f,
                charts,
                "GitHub Repo Activity",
                "Type an owner and a repository, then press Enter.",
                Some("Tab switches field, F1 shows help, Esc quits."),
                Color::Cyan,
            );
        }
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        "Data source: GitHub REST API /repos/{owner}/{repo}/commits",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(footer, areas.footer);

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

fn draw_status(f: &mut Frame, area: Rect, state: &DashboardState) {
    let color = match state.outcome {
        LoadOutcome::Failed { .. } => Color::Red,
        LoadOutcome::Empty(_) | LoadOutcome::Loading(_) => Color::Yellow,
        LoadOutcome::Loaded(_) => Color::Green,
        LoadOutcome::Idle => Color::Gray,
    };
    f.render_widget(
        Paragraph::new(Span::styled(state.status_line(), Style::default().fg(color))),
        area,
    );
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::CommitSource;
    use crate::error::Result;
    use crate::model::RepoId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::{json, Value};

    struct Canned(Vec<Value>);

    impl CommitSource for Canned {
        fn list_commits(&self, _repo: &RepoId) -> Result<Vec<Value>> {
            Ok(self.0.clone())
        }
    }

    fn render(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn commit(n: u32, day: u32, login: Option<&str>) -> Value {
        json!({
            "sha": format!("{n:040}"),
            "commit": {
                "author": { "name": "N", "date": format!("2024-02-{day:02}T10:00:00Z") },
                "message": "m"
            },
            "author": login.map(|l| json!({ "login": l })),
        })
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }

    #[test]
    fn idle_screen_shows_inputs_and_source() {
        let state = DashboardState::new(None, None, 10);
        let screen = render(&state);
        assert!(screen.contains("pandas-dev"));
        assert!(screen.contains("Data source: GitHub REST API"));
    }

    #[test]
    fn loaded_screen_shows_charts_and_cards() {
        let mut state = DashboardState::new(Some("plotly"), Some("dash"), 10);
        state.submit(&Canned(vec![
            commit(1, 14, Some("alice")),
            commit(2, 13, Some("bob")),
            commit(3, 1, Some("alice")),
        ]));
        let screen = render(&state);
        assert!(screen.contains("Commit activity over time for plotly/dash"));
        assert!(screen.contains("Top contributors"));
        assert!(screen.contains("66.7%"));
        assert!(screen.contains("alice"));
    }

    #[test]
    fn empty_result_renders_placeholders() {
        let mut state = DashboardState::new(Some("plotly"), Some("dash"), 10);
        state.submit(&Canned(Vec::new()));
        let screen = render(&state);
        assert!(screen.contains("No commits returned for this repository."));
        assert!(screen.contains("0.0%"));
        assert!(!screen.contains("Commit activity over time"));
    }

    #[test]
    fn failure_renders_message_and_no_chart() {
        let mut state = DashboardState::new(Some(""), Some("dash"), 10);
        state.submit(&Canned(Vec::new()));
        let screen = render(&state);
        assert!(screen.contains("Please enter both owner and repo."));
        assert!(!screen.contains("Commit activity over time"));
        assert!(!screen.contains("Top contributors"));
    }
}
