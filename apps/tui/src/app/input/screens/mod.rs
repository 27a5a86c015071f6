use crate::app::state::App;
use crossterm::event::KeyCode;

mod chart;
mod help;
mod selector;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.selector.open {
        selector::handle_selector_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    chart::handle_chart_input(app, key);
}
