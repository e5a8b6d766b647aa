use crate::settings::Bindings;
use macroquad::input::{KeyCode, is_key_down, is_key_pressed};
use tilewalk_shared::state::PlayerCommand;

/// Polls the movement bindings. Either binding of a pair is enough.
pub fn input_handler(bindings: &Bindings) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if is_key_down(bindings.left) || is_key_down(bindings.left_alt) {
        commands.push(PlayerCommand::MoveLeft);
    }
    if is_key_down(bindings.right) || is_key_down(bindings.right_alt) {
        commands.push(PlayerCommand::MoveRight);
    }

    commands
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
