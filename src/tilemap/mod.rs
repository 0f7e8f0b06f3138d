//! Tilemap module - Tilesheets, tile rules and CSV or TMX tile layers.
//!
//! A [`Tilesheet`] slices one image into equally sized [`Tile`]s. Optional
//! per-tile flags come from a sibling `.rules` file ([`TileRules`]). A
//! [`TileMap`] places sheet tiles on a grid and renders the layer to a
//! [`Surface`](crate::surface::Surface) or reports its solid blocks. Layers
//! come from CSV text or from the CSV layers of a Tiled `.tmx` file.

mod map;
mod rules;
pub(crate) mod tilesheet;
mod tmx;

pub use map::TileMap;
pub use rules::{SOLID_BLOCK, TileRules};
pub use tilesheet::{Tile, Tilesheet, index_to_coord};
pub use tmx::{tmx_file_to_tilemaps, tmx_to_tilemaps};

use crate::surface::SurfaceError;

/// Errors from loading tilesheets, rules and maps.
#[derive(Debug, thiserror::Error)]
pub enum TilemapError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Image(#[from] SurfaceError),
    #[error("Invalid rule on line {line}: {message}")]
    InvalidRule { line: usize, message: String },
    #[error("Invalid tile id {value:?} at row {row}, column {column}")]
    InvalidTileId {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("Tile {id} not in tilesheet ({available} tiles)")]
    UnknownTile { id: usize, available: usize },
    #[error("Malformed TMX document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("TMX map has no tileset with a firstgid")]
    MissingTileset,
    #[error("Invalid tileset firstgid {0:?}")]
    InvalidFirstGid(String),
    #[error("TMX layer data is {encoding:?} encoded, only csv is supported")]
    LayerNotCsv { encoding: String },
}
