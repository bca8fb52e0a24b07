use ratatui::style::{Color, Modifier, Style};

/// Chooses a style/color based on relative commit activity.
pub fn get_intensity_color(commits: usize, max: usize) -> Style {
    if max == 0 {
        return Style::default().fg(Color::White);
    }

    let ratio = commits as f64 / max as f64;
    if ratio > 0.8 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if ratio > 0.6 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if ratio > 0.4 {
        Style::default().fg(Color::Green)
    } else if ratio > 0.2 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    }
}

/// Bus-factor colouring for the top-author share card.
pub fn share_color(share: f64) -> Color {
    if share >= 0.5 {
        Color::Red
    } else if share >= 0.25 {
        Color::Yellow
    } else {
        Color::Green
    }
}
