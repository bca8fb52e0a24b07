use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render a message in place of the charts (errors, loading, idle).
pub fn draw_message(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
    color: Color,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))));
    }

    let para = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(para, area);
}

/// Empty-state chart frame shown when the repository returned no commits.
pub fn draw_placeholder(f: &mut Frame, area: Rect, title: &str) {
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No commits returned for this repository.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(para, area);
}
