use crate::app::state::{App, LoadState};
use crossterm::event::KeyCode;

pub fn handle_chart_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        _ if app.load_state != LoadState::Ready => {}
        KeyCode::Left | KeyCode::Char('h') => app.select_relative(false),
        KeyCode::Right | KeyCode::Char('l') => app.select_relative(true),
        KeyCode::Enter | KeyCode::Char('/') => {
            let current = app.current_identifier().map(str::to_string);
            app.selector.open(current.as_deref());
        }
        _ => {}
    }
}
