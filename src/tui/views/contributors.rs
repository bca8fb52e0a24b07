use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use super::super::draw::get_intensity_color;
use super::truncate;
use crate::model::AuthorCounts;

const MAX_LABEL: usize = 12;

/// Render the ranked contributor bar chart (top `top` authors).
pub fn draw_contributors_chart(f: &mut Frame, area: Rect, authors: &AuthorCounts, top: usize) {
    let shown = authors.top(top);
    let labels: Vec<(String, u64)> = shown
        .iter()
        .map(|(author, commits)| (truncate(&author.to_string(), MAX_LABEL), *commits as u64))
        .collect();
    let max = authors.max();
    let bars: Vec<Bar> = labels
        .iter()
        .map(|(label, commits)| {
            let style = get_intensity_color(*commits as usize, max);
            Bar::default()
                .value(*commits)
                .label(Line::from(label.clone()))
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let gap = 1u16;
    let inner = area.width.saturating_sub(2);
    let slots = (bars.len() as u16).max(1);
    let widest = labels
        .iter()
        .map(|(l, _)| l.chars().count() as u16)
        .max()
        .unwrap_or(3)
        .max(3);
    let bar_width = widest.min((inner / slots).saturating_sub(gap)).max(1);

    let title = if authors.unique() > shown.len() {
        format!("Top contributors (top {} of {})", shown.len(), authors.unique())
    } else {
        "Top contributors".to_string()
    };

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .label_style(Style::default().fg(Color::White))
        .max(max as u64);

    f.render_widget(chart, area);
}
