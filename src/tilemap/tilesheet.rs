//! Tilesheets: one image sliced into equally sized tiles.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{SOLID_BLOCK, TileRules, TilemapError};
use crate::surface::{Rect, Size, Surface};

/// A single tile graphic cut from a tilesheet.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Index of this tile within its sheet (row-major).
    pub id: usize,
    pub image: Surface,
    /// The whole tile is impassable.
    pub solid_block: bool,
}

/// Tiles sliced row-major from one surface.
#[derive(Debug, Clone)]
pub struct Tilesheet {
    surface: Surface,
    tiles: Vec<Tile>,
    tile_size: Size,
}

impl Tilesheet {
    /// Slice `surface` into `tile_size` tiles, applying `rules`.
    ///
    /// Partial tiles at the right and bottom edges are dropped.
    pub fn from_surface(surface: Surface, tile_size: Size, rules: &TileRules) -> Self {
        let columns = surface.width().checked_div(tile_size.width).unwrap_or(0) as usize;
        let rows = surface.height().checked_div(tile_size.height).unwrap_or(0) as usize;

        let tiles = (0..columns * rows)
            .map(|id| {
                let (cx, cy) = index_to_coord(columns, id);
                let area = Rect::new(
                    (cx as u32 * tile_size.width) as i32,
                    (cy as u32 * tile_size.height) as i32,
                    tile_size.width,
                    tile_size.height,
                );
                Tile {
                    id,
                    image: surface.subsurface(area),
                    solid_block: rules.has_flag(id, SOLID_BLOCK),
                }
            })
            .collect();

        Self {
            surface,
            tiles,
            tile_size,
        }
    }

    /// Load a tilesheet image, with rules from `<path>.rules` if that file
    /// exists.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, TilemapError> {
        let path = path.as_ref();
        let surface = Surface::open(path)?;
        let rules = TileRules::load_optional(rules_path(path))?;

        let sheet = Self::from_surface(surface, Size::new(tile_width, tile_height), &rules);
        log::debug!(
            "Tilesheet {}: {} tiles of {}x{}",
            path.display(),
            sheet.tiles.len(),
            tile_width,
            tile_height
        );
        Ok(sheet)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    #[inline]
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

/// `sheet.png` -> `sheet.png.rules`
fn rules_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".rules");
    PathBuf::from(name)
}

/// 2D grid position `(x, y)` of the 1D row-major index `i` in a grid `width`
/// cells wide.
///
/// ```
/// use spritecam::tilemap::index_to_coord;
/// assert_eq!(index_to_coord(3, 8), (2, 2));
/// ```
///
/// # Panics
/// If `width` is zero.
#[inline]
pub fn index_to_coord(width: usize, i: usize) -> (usize, usize) {
    (i % width, i / width)
}
