// App module for player_radar
// Handles application state and input

pub mod input;
pub mod selector;
pub mod state;

pub use input::handle_input;
pub use state::{App, LoadState};
