use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_selector_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.selector.close(),
        KeyCode::Enter => {
            if let Some(identifier) = app.selector.confirm() {
                app.select(&identifier);
            }
        }
        KeyCode::Up => app.selector.move_up(),
        KeyCode::Down => app.selector.move_down(),
        KeyCode::Backspace => app.selector.pop_char(),
        KeyCode::Char(c) => app.selector.push_char(c),
        _ => {}
    }
}
