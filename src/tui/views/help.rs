use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )])
}

/// Draw the modal help overlay describing inputs and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 70, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "ghpulse - Help",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        section("Inputs:"),
        Line::from("  Tab / ↑ / ↓  Switch between owner and repo"),
        Line::from("  Backspace    Delete a character"),
        Line::from("  Ctrl+U       Clear the focused field"),
        Line::from("  Paste        'owner/repo' fills both fields"),
        Line::from(""),
        section("Actions:"),
        Line::from("  Enter        Load the last 100 commits"),
        Line::from(""),
        section("Charts:"),
        Line::from("  Commits per ISO week, empty weeks shown as zero"),
        Line::from("  Top contributors by commit count"),
        Line::from("  Top author share approximates the bus factor"),
        Line::from(""),
        section("General:"),
        Line::from("  F1           Toggle this help"),
        Line::from("  Esc, Ctrl+C  Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'F1' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
