use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::super::draw::share_color;
use crate::model::SummaryMetrics;

/// Render the four scalar cards. `None` renders dashes.
pub fn draw_summary_cards(f: &mut Frame, area: Rect, summary: Option<&SummaryMetrics>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let dash = || "-".to_string();
    let cards = [
        (
            "Total commits",
            summary.map(|s| s.total_commits.to_string()).unwrap_or_else(dash),
            Color::Green,
        ),
        (
            "Unique authors",
            summary.map(|s| s.unique_authors.to_string()).unwrap_or_else(dash),
            Color::Cyan,
        ),
        (
            "Date range",
            summary
                .and_then(|s| s.date_range)
                .map(|(min, max)| {
                    format!("{} → {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d"))
                })
                .unwrap_or_else(dash),
            Color::White,
        ),
        (
            "Top author share",
            summary
                .map(|s| format!("{:.1}%", s.top_author_share * 100.0))
                .unwrap_or_else(dash),
            summary.map(|s| share_color(s.top_author_share)).unwrap_or(Color::White),
        ),
    ];

    for ((title, value, color), rect) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(card, *rect);
    }
}
