use super::{PlayerCommand, PlayerState, Vec2, physics::*};
use crate::map::TileMap;

/// Folds the frame's commands into a horizontal direction of -1, 0 or +1.
pub fn direction(commands: &[PlayerCommand]) -> f32 {
    let left = commands.contains(&PlayerCommand::MoveLeft);
    let right = commands.contains(&PlayerCommand::MoveRight);

    let mut direction = 0.0;
    if left {
        direction -= 1.0;
    }
    if right {
        direction += 1.0;
    }
    direction
}

impl PlayerState {
    /// Runs one frame of movement: friction, acceleration, then a move that
    /// is dropped entirely if it would end inside a collidable tile.
    ///
    /// Velocity is kept on a blocked move, so the player keeps pushing into
    /// the wall until friction brings it to rest.
    pub fn mutate(&mut self, commands: &[PlayerCommand], map: &TileMap, dt: f32) {
        apply_friction(&mut self.vel);

        self.vel.x += direction(commands) * self.move_force * dt;

        self.try_move(map, self.pos + self.vel);
    }

    /// Moves to `new_pos` unless the collision box would overlap a
    /// collidable tile there. Returns whether the move happened.
    pub fn try_move(&mut self, map: &TileMap, new_pos: Vec2) -> bool {
        if collides(map, &player_rect(self, new_pos)) {
            return false;
        }
        self.pos = new_pos;
        true
    }
}
