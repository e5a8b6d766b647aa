//! Window-free game state for tilewalk: the tile map, the player and the
//! per-frame movement, collision and animation rules that act on them.

pub mod map;
pub mod state;
