use super::state::DashboardState;

/// Longest owner or repo name GitHub accepts.
const MAX_INPUT_LEN: usize = 100;

pub fn push_char(state: &mut DashboardState, c: char) {
    if c.is_control() {
        return;
    }
    let field = state.focused_mut();
    if field.chars().count() < MAX_INPUT_LEN {
        field.push(c);
    }
}

pub fn pop_char(state: &mut DashboardState) {
    state.focused_mut().pop();
}

pub fn clear_field(state: &mut DashboardState) {
    state.focused_mut().clear();
}

const URL_PREFIXES: [&str; 3] = ["https://github.com/", "http://github.com/", "github.com/"];

/// Pasting `owner/repo` or a github.com URL into either box fills both.
pub fn apply_paste(state: &mut DashboardState, text: &str) {
    let mut text = text.trim();
    for prefix in URL_PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = rest;
            break;
        }
    }
    let text = text.trim_end_matches('/');
    if let Some((owner, repo)) = text.split_once('/') {
        state.owner = owner.trim().to_string();
        state.repo = repo.trim().trim_end_matches(".git").to_string();
    } else {
        for c in text.chars() {
            push_char(state, c);
        }
    }
}
