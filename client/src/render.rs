use crate::textures::PlayerTextures;
use macroquad::color::{BLACK, Color, WHITE};
use macroquad::math::Rect;
use macroquad::shapes::draw_rectangle;
use macroquad::text::draw_text;
use macroquad::texture::{DrawTextureParams, draw_texture, draw_texture_ex};
use tilewalk_shared::map::{RgbaColor, TileMap};
use tilewalk_shared::state::{Player, Pose};

pub const SKY: Color = Color::new(0.53, 0.75, 0.92, 1.0);
const DEBUG_FONT_SIZE: f32 = 30.0;

/// Draws the map and the player in world space. The walk cycle is stepped
/// here rather than in the update, so the drawn frame trails input by one
/// frame.
pub fn render(player: &mut Player, map: &TileMap, textures: &PlayerTextures, now: f64) {
    draw_map(map);

    let pos = player.state.pos;
    match player.animate(now) {
        Pose::Idle => draw_texture(&textures.idle, pos.x, pos.y, WHITE),
        Pose::Walking { flip_x } => {
            let source = Rect::new(0.0, 0.0, player.state.width, player.state.height);
            draw_texture_ex(
                textures.walk_frame(player.animation.frame()),
                pos.x,
                pos.y,
                WHITE,
                DrawTextureParams {
                    source: Some(source),
                    flip_x,
                    ..Default::default()
                },
            );
        }
    }
}

fn draw_map(map: &TileMap) {
    for (rect, tile) in map.solid_tiles() {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, to_color(tile.color()));
    }
}

/// Screen-space velocity readout. Call after switching back to the default camera.
pub fn draw_debug_overlay(player: &Player) {
    draw_text(
        &format!("Velocity: {}", player.state.vel),
        10.0,
        DEBUG_FONT_SIZE,
        DEBUG_FONT_SIZE,
        BLACK,
    );
}

fn to_color(color: RgbaColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
