mod animation;
mod mutate;
mod physics;

pub use animation::AnimationState;
pub use mutate::direction;
pub use physics::{apply_friction, collides, player_rect};

use crate::map::SpawnPoint;
use std::fmt::Display;
use std::ops::{Add, Mul};

// Player
pub const PLAYER_WIDTH: f32 = 16.0;
pub const PLAYER_HEIGHT: f32 = 32.0;
pub const PLAYER_MASS: f32 = 45.0;
pub const MOVE_FORCE_PER_MASS: f32 = 5.5;
pub const JUMP_FORCE_PER_MASS: f32 = 2.0;

// Physics
pub const FRICTION_COEFFICIENT: f32 = 0.01;
pub const VELOCITY_EPSILON: f32 = 0.1;

// Animation
pub const WALK_FRAME_COUNT: usize = 4;
pub const WALK_FPS: f32 = 10.0;

// Camera
pub const CAMERA_OFFSET: Vec2 = Vec2::new(16.0, -16.0);

/// World-space vector in pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Input vocabulary for one frame. Several commands can be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    MoveLeft,
    MoveRight,
}

/// Which sprite the renderer should draw for the player this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Walking { flip_x: bool },
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub move_force: f32,
    /// Derived from the mass like `move_force`; nothing consumes it yet.
    pub jump_force: f32,
}

impl PlayerState {
    pub fn new(spawn_point: &SpawnPoint) -> PlayerState {
        PlayerState {
            pos: Vec2::new(spawn_point.x, spawn_point.y),
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            move_force: PLAYER_MASS * MOVE_FORCE_PER_MASS,
            jump_force: PLAYER_MASS * JUMP_FORCE_PER_MASS,
        }
    }

    pub fn pose(&self) -> Pose {
        if self.vel.x == 0.0 {
            Pose::Idle
        } else {
            Pose::Walking {
                flip_x: self.vel.x < 0.0,
            }
        }
    }
}

/// The single player: physical state plus its walk cycle.
#[derive(Debug, Clone)]
pub struct Player {
    pub state: PlayerState,
    pub animation: AnimationState,
}

impl Player {
    pub fn new(spawn_point: &SpawnPoint, now: f64) -> Player {
        Player {
            state: PlayerState::new(spawn_point),
            animation: AnimationState::new(WALK_FRAME_COUNT, WALK_FPS, now),
        }
    }

    pub fn camera_target(&self) -> Vec2 {
        self.state.pos + CAMERA_OFFSET
    }

    /// Selects the pose for this frame, stepping the walk cycle when walking.
    /// Idle frames leave the timer untouched so walking resumes mid-cycle.
    pub fn animate(&mut self, now: f64) -> Pose {
        let pose = self.state.pose();
        if let Pose::Walking { .. } = pose {
            self.animation.advance(now);
        }
        pose
    }
}
