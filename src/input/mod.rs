use macroquad::prelude::*;
use crate::application::GameState;

/// What the host loop should do after reading input this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> (GameState, Control) {
    if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
        log::info!("Quit requested at generation {}", state.generation());
        return (state, Control::Quit);
    }

    let state = if is_key_pressed(KeyCode::Space) {
        state.toggle_running()
    } else {
        state
    };

    (state, Control::Continue)
}
