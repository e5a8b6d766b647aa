use crate::state::{Rect, Vec2};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to open map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("map JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("map has {tiles} tiles but a grid width of 0")]
    ZeroWidth { tiles: usize },
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(f32),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const DEFAULT_TILE_COLOR: RgbaColor = RgbaColor {
    r: 110,
    g: 82,
    b: 58,
    a: 255,
};

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Tile {
    #[serde(default)]
    pub collision: bool,
    #[serde(default)]
    pub color: Option<RgbaColor>,
}

impl Tile {
    pub fn color(&self) -> RgbaColor {
        self.color.unwrap_or(DEFAULT_TILE_COLOR)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

/// Static row-major tile grid. A tile's position is implied by its index.
///
/// Only constructed through [`TileMap::new`], [`TileMap::from_json`] or
/// [`TileMap::load`], so a grid with tiles always has a non-zero width.
#[derive(Debug, Deserialize, Clone)]
pub struct TileMap {
    width: usize,
    tile_size: f32,
    tiles: Vec<Tile>,
    #[serde(default)]
    spawn_point: SpawnPoint,
}

impl TileMap {
    pub fn new(
        width: usize,
        tile_size: f32,
        tiles: Vec<Tile>,
        spawn_point: SpawnPoint,
    ) -> Result<TileMap, MapError> {
        let map = TileMap {
            width,
            tile_size,
            tiles,
            spawn_point,
        };
        map.validate()?;
        Ok(map)
    }

    pub fn from_json(json: &str) -> Result<TileMap, MapError> {
        let map: TileMap = serde_json::from_str(json)?;
        map.validate()?;
        Ok(map)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<TileMap, MapError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map: TileMap = serde_json::from_reader(BufReader::new(file))?;
        map.validate()?;

        log::info!(
            "loaded map {} ({}x{} tiles of {}px, {} collidable)",
            path.display(),
            map.width,
            map.height(),
            map.tile_size,
            map.tiles.iter().filter(|t| t.collision).count()
        );
        Ok(map)
    }

    fn validate(&self) -> Result<(), MapError> {
        if self.width == 0 && !self.tiles.is_empty() {
            return Err(MapError::ZeroWidth {
                tiles: self.tiles.len(),
            });
        }
        if self.tile_size.is_nan() || self.tile_size <= 0.0 {
            return Err(MapError::InvalidTileSize(self.tile_size));
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn spawn_point(&self) -> &SpawnPoint {
        &self.spawn_point
    }

    /// Number of rows, counting a trailing partial row.
    pub fn height(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        self.tiles.len().div_ceil(self.width)
    }

    pub fn tile_position(&self, index: usize) -> Vec2 {
        let column = (index % self.width) as f32;
        let row = (index / self.width) as f32;
        Vec2::new(column, row) * self.tile_size
    }

    pub fn tile_rect(&self, index: usize) -> Rect {
        let pos = self.tile_position(index);
        Rect::new(pos.x, pos.y, self.tile_size, self.tile_size)
    }

    /// Collidable tiles with their world rectangles, in index order.
    pub fn solid_tiles(&self) -> impl Iterator<Item = (Rect, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.collision)
            .map(|(index, tile)| (self.tile_rect(index), tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map() {
        let map = TileMap::from_json(
            r#"{
                "width": 3,
                "tile_size": 16,
                "spawn_point": { "x": 4, "y": 8 },
                "tiles": [
                    {},
                    { "collision": true },
                    { "collision": true, "color": { "r": 1, "g": 2, "b": 3, "a": 4 } },
                    { "collision": false }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2, "Partial last row still counts");
        assert_eq!(map.spawn_point(), &SpawnPoint { x: 4.0, y: 8.0 });
        assert!(!map.tiles()[0].collision, "Collision defaults to false");
        assert_eq!(map.tiles()[1].color(), DEFAULT_TILE_COLOR);
        assert_eq!(map.tiles()[2].color(), RgbaColor { r: 1, g: 2, b: 3, a: 4 });
    }

    #[test]
    fn test_tile_rect_from_index() {
        let map = TileMap::from_json(r#"{ "width": 10, "tile_size": 32, "tiles": [] }"#).unwrap();
        assert_eq!(map.tile_rect(5), Rect::new(160.0, 0.0, 32.0, 32.0));
        assert_eq!(map.tile_rect(23), Rect::new(96.0, 64.0, 32.0, 32.0));
    }

    #[test]
    fn test_solid_tiles_in_index_order() {
        let map = TileMap::from_json(
            r#"{ "width": 2, "tile_size": 10,
                 "tiles": [{ "collision": true }, {}, {}, { "collision": true }] }"#,
        )
        .unwrap();

        let rects: Vec<Rect> = map.solid_tiles().map(|(rect, _)| rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Rect::new(10.0, 10.0, 10.0, 10.0)
            ]
        );
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = TileMap::from_json(r#"{ "width": 0, "tile_size": 32, "tiles": [{}] }"#)
            .unwrap_err();
        assert!(matches!(err, MapError::ZeroWidth { tiles: 1 }));
    }

    #[test]
    fn test_constructor_rejects_zero_width_with_solid_tile() {
        let solid = Tile {
            collision: true,
            color: None,
        };
        let err = TileMap::new(0, 32.0, vec![solid], SpawnPoint::default()).unwrap_err();
        assert!(matches!(err, MapError::ZeroWidth { tiles: 1 }));
    }

    #[test]
    fn test_constructor_accepts_valid_grid() {
        let map = TileMap::new(2, 16.0, vec![Tile::default(); 4], SpawnPoint::default()).unwrap();
        assert_eq!(map.height(), 2);
        assert_eq!(map.tile_rect(3), Rect::new(16.0, 16.0, 16.0, 16.0));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = TileMap::from_json("{").unwrap_err();
        assert!(matches!(err, MapError::Parse(_)), "got {err:?}");

        let err = TileMap::from_json(r#"{ "width": "wide", "tile_size": 32, "tiles": [] }"#)
            .unwrap_err();
        assert!(matches!(err, MapError::Parse(_)), "Wrong field type, got {err:?}");
    }

    #[test]
    fn test_empty_map_with_zero_width_is_allowed() {
        let map = TileMap::from_json(r#"{ "width": 0, "tile_size": 32, "tiles": [] }"#).unwrap();
        assert_eq!(map.height(), 0);
        assert_eq!(map.solid_tiles().count(), 0);
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        for size in ["0", "-4"] {
            let json = format!(r#"{{ "width": 1, "tile_size": {size}, "tiles": [] }}"#);
            let err = TileMap::from_json(&json).unwrap_err();
            assert!(matches!(err, MapError::InvalidTileSize(_)), "size {size}");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TileMap::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }
}
