use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub struct DashboardAreas {
    pub inputs: Rect,
    pub status: Rect,
    pub cards: Rect,
    pub activity: Rect,
    pub contributors: Rect,
    pub footer: Rect,
}

/// Splits the screen top to bottom: inputs, status, summary cards, the two charts, footer.
pub fn dashboard_areas(area: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    DashboardAreas {
        inputs: rows[0],
        status: rows[1],
        cards: rows[2],
        activity: rows[3],
        contributors: rows[4],
        footer: rows[5],
    }
}
