use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use super::events::{handle_event, Action};
use super::state::DashboardState;
use super::views::draw_dashboard;
use crate::fetch::CommitSource;
use crate::pipeline::load;

/// Run the interactive dashboard until the user quits.
pub fn run(
    source: &dyn CommitSource,
    mut state: DashboardState,
    load_on_start: bool,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, source, &mut state, load_on_start);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    source: &dyn CommitSource,
    state: &mut DashboardState,
    load_on_start: bool,
) -> io::Result<()> {
    let mut pending = if load_on_start { Action::Load } else { Action::None };

    loop {
        if pending == Action::Load {
            // Paint the Loading state first; the fetch blocks until it returns.
            if let Some(repo) = state.begin_load() {
                terminal.draw(|f| draw_dashboard(f, state))?;
                let result = load(source, &repo);
                state.finish_load(result);
            }
        }

        if let Err(e) = terminal.draw(|f| draw_dashboard(f, state)) {
            tracing::error!(error = %e, "draw failed");
        }

        pending = Action::None;
        if poll(Duration::from_millis(200))? {
            match handle_event(read()?, state) {
                Action::Quit => break,
                action => pending = action,
            }
        }
    }

    Ok(())
}
