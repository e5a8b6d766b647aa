use super::{FRICTION_COEFFICIENT, PlayerState, Rect, VELOCITY_EPSILON, Vec2};
use crate::map::TileMap;

/// Applies ground friction to the horizontal velocity.
///
/// The coefficient is negated, so a surviving velocity flips direction every
/// frame instead of decaying towards zero. Anything slower than
/// [`VELOCITY_EPSILON`] snaps to rest.
pub fn apply_friction(vel: &mut Vec2) {
    vel.x *= -FRICTION_COEFFICIENT;
    if vel.x.abs() < VELOCITY_EPSILON {
        vel.x = 0.0;
    }
}

/// Collision box of `player` if it stood at `pos`.
pub fn player_rect(player: &PlayerState, pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, player.width, player.height)
}

/// Returns true if `rect` overlaps any collidable tile of `map`.
pub fn collides(map: &TileMap, rect: &Rect) -> bool {
    // TODO: only scan the tiles under `rect` instead of the whole grid
    for (index, tile) in map.tiles().iter().enumerate() {
        if !tile.collision {
            continue;
        }

        let tile_rect = map.tile_rect(index);
        if rect.overlaps(&tile_rect) {
            log::trace!("{:?} blocked by tile {} at {:?}", rect, index, tile_rect);
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{SpawnPoint, Tile};

    fn create_test_map(width: usize, solid: &[usize]) -> TileMap {
        let mut tiles = vec![Tile::default(); width * 4];
        for &index in solid {
            tiles[index].collision = true;
        }
        TileMap::new(width, 32.0, tiles, SpawnPoint::default()).unwrap()
    }

    #[test]
    fn test_friction_floor_holds() {
        let mut vel = Vec2::ZERO;
        for _ in 0..10 {
            apply_friction(&mut vel);
            assert_eq!(vel.x, 0.0, "Resting velocity should stay at rest");
        }
    }

    #[test]
    fn test_friction_inverts_sign() {
        let mut vel = Vec2::new(50.0, 7.0);
        apply_friction(&mut vel);
        assert!((vel.x + 0.5).abs() < 1e-6, "Expected -0.5, got {}", vel.x);
        assert_eq!(vel.y, 7.0, "Friction is horizontal only");

        apply_friction(&mut vel);
        assert_eq!(vel.x, 0.0, "Small velocities snap to zero");
    }

    #[test]
    fn test_empty_map_never_collides() {
        let map = TileMap::new(0, 32.0, vec![], SpawnPoint::default()).unwrap();
        assert!(!collides(&map, &Rect::new(0.0, 0.0, 1000.0, 1000.0)));
    }

    #[test]
    fn test_non_colliding_tiles_are_skipped() {
        let map = create_test_map(10, &[]);
        assert!(!collides(&map, &Rect::new(0.0, 0.0, 320.0, 128.0)));
    }

    #[test]
    fn test_tile_position_is_row_major() {
        // index 12 on a 10 wide grid sits at column 2, row 1
        let map = create_test_map(10, &[12]);
        assert!(collides(&map, &Rect::new(70.0, 40.0, 16.0, 16.0)));
        assert!(!collides(&map, &Rect::new(70.0, 0.0, 16.0, 16.0)));
        assert!(!collides(&map, &Rect::new(32.0, 40.0, 16.0, 16.0)));
    }

    #[test]
    fn test_touching_a_tile_is_not_a_collision() {
        let map = create_test_map(10, &[5]);
        assert!(!collides(&map, &Rect::new(144.0, 0.0, 16.0, 32.0)));
        assert!(!collides(&map, &Rect::new(192.0, 0.0, 16.0, 32.0)));
        assert!(!collides(&map, &Rect::new(160.0, 32.0, 16.0, 32.0)));
    }
}
