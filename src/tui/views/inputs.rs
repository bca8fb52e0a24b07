use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::super::state::{DashboardState, Field};

/// Render the owner/repo text inputs and place the cursor in the focused one.
pub fn draw_inputs(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    for (field, value, title, rect) in [
        (Field::Owner, &state.owner, "owner (e.g. pandas-dev)", chunks[0]),
        (Field::Repo, &state.repo, "repo (e.g. pandas)", chunks[1]),
    ] {
        let focused = state.focus == field;
        let border = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let input = Paragraph::new(value.as_str())
            .style(Style::default().fg(Color::White))
            .block(Block::default().title(title).borders(Borders::ALL).border_style(border));
        f.render_widget(input, rect);

        if focused && !state.show_help {
            let max_x = rect.x + rect.width.saturating_sub(2);
            let x = (rect.x + 1 + value.chars().count() as u16).min(max_x);
            f.set_cursor(x, rect.y + 1);
        }
    }

    let button = Paragraph::new("⏎ Load data")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);
}
