//! Keyboard input handling

use game_core::{Control, InputState};

/// Map a DOM key name onto a game control
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "ArrowUp" => Some(Control::Up),
        "ArrowDown" => Some(Control::Down),
        "ArrowLeft" => Some(Control::Left),
        "ArrowRight" => Some(Control::Right),
        "a" => Some(Control::Pass),
        "s" => Some(Control::Shoot),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(input: &mut InputState, key: &str) {
    if let Some(control) = control_for_key(key) {
        input.press(control);
    }
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputState, key: &str) {
    if let Some(control) = control_for_key(key) {
        input.release(control);
    }
}
