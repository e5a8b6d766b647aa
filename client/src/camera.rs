use macroquad::camera::Camera2D;
use macroquad::math::vec2;
use tilewalk_shared::state::Player;

/// Unscaled camera of `view_w` x `view_h` pixels centred on the player's
/// follow target. No smoothing and no clamping to the map.
///
/// World y grows downwards on screen. macroquad flips y for screen cameras,
/// so the zoom stays positive on both axes.
pub fn follow_camera(player: &Player, view_w: f32, view_h: f32) -> Camera2D {
    let target = player.camera_target();
    Camera2D {
        target: vec2(target.x, target.y),
        zoom: vec2(2.0 / view_w, 2.0 / view_h),
        ..Default::default()
    }
}
