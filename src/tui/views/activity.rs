use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::pipeline::Loaded;

/// Render commits per week as a line chart over the dense weekly series.
pub fn draw_activity_chart(f: &mut Frame, area: Rect, loaded: &Loaded) {
    let weekly = &loaded.metrics.weekly;
    let points: Vec<(f64, f64)> = weekly
        .iter()
        .enumerate()
        .map(|(i, w)| (i as f64, w.count as f64))
        .collect();

    let max_count = weekly.iter().map(|w| w.count).max().unwrap_or(0).max(1);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let mut x_labels: Vec<Span> = Vec::new();
    if let Some(first) = weekly.first() {
        x_labels.push(Span::raw(first.label()));
    }
    if weekly.len() > 2 {
        x_labels.push(Span::raw(weekly[weekly.len() / 2].label()));
    }
    if weekly.len() > 1 {
        if let Some(last) = weekly.last() {
            x_labels.push(Span::raw(last.label()));
        }
    }

    let dataset = Dataset::default()
        .name("commits")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!("Commit activity over time for {}", loaded.repo))
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Week")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Commits")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_count as f64])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", max_count.div_ceil(2))),
                    Span::raw(format!("{max_count}")),
                ]),
        );

    f.render_widget(chart, area);
}
