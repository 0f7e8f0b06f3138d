//! Tile maps: a grid of tile ids over one tilesheet.

use super::{Tile, TilemapError, Tilesheet};
use crate::surface::{Rect, Size, Surface};

/// One layer of a map. Cells hold an index into the tilesheet, or `None`
/// for an empty cell.
#[derive(Debug, Clone)]
pub struct TileMap<'a> {
    tilesheet: &'a Tilesheet,
    rows: Vec<Vec<Option<usize>>>,
}

impl<'a> TileMap<'a> {
    /// Build from rows of sheet indices. Fails on indices the sheet does not
    /// have.
    pub fn new(tilesheet: &'a Tilesheet, rows: Vec<Vec<Option<usize>>>) -> Result<Self, TilemapError> {
        let available = tilesheet.tiles().len();
        if let Some(id) = rows.iter().flatten().flatten().find(|&&id| id >= available) {
            return Err(TilemapError::UnknownTile {
                id: *id,
                available,
            });
        }
        Ok(Self { tilesheet, rows })
    }

    /// Parse a CSV layer of global tile ids.
    ///
    /// Each line is a row; blank lines and empty cells (trailing commas) are
    /// skipped. A global id below `firstgid` (0 in TMX exports) is an empty
    /// cell; other ids map to sheet index `gid - firstgid`.
    pub fn from_csv(csv: &str, tilesheet: &'a Tilesheet, firstgid: usize) -> Result<Self, TilemapError> {
        let mut rows = Vec::new();

        for (row_index, line) in csv.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut row = Vec::new();
            for (column, cell) in line.split(',').map(str::trim).enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let gid: usize = cell.parse().map_err(|_| TilemapError::InvalidTileId {
                    row: row_index,
                    column,
                    value: cell.to_string(),
                })?;
                row.push(gid.checked_sub(firstgid));
            }
            rows.push(row);
        }

        Self::new(tilesheet, rows)
    }

    pub fn tilesheet(&self) -> &Tilesheet {
        self.tilesheet
    }

    pub fn rows(&self) -> &[Vec<Option<usize>>] {
        &self.rows
    }

    /// Tile at grid cell (x, y).
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&'a Tile> {
        let id = (*self.rows.get(y)?.get(x)?)?;
        self.tilesheet.tile(id)
    }

    /// Grid size as (columns, rows); the widest row sets the column count.
    pub fn size_in_tiles(&self) -> (usize, usize) {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (columns, self.rows.len())
    }

    /// Pixel size of the rendered layer.
    pub fn pixel_size(&self) -> Size {
        let (columns, rows) = self.size_in_tiles();
        let tile = self.tilesheet.tile_size();
        Size::new(columns as u32 * tile.width, rows as u32 * tile.height)
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, &'a Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            row.iter().enumerate().filter_map(move |(x, id)| {
                id.and_then(|id| self.tilesheet.tile(id)).map(|tile| (x, y, tile))
            })
        })
    }

    fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let tile = self.tilesheet.tile_size();
        Rect::new(
            (x as u32 * tile.width) as i32,
            (y as u32 * tile.height) as i32,
            tile.width,
            tile.height,
        )
    }

    /// Pixel rectangles of every solid tile, row-major.
    pub fn solid_blocks(&self) -> Vec<Rect> {
        self.cells()
            .filter(|(_, _, tile)| tile.solid_block)
            .map(|(x, y, _)| self.cell_rect(x, y))
            .collect()
    }

    /// Render the layer onto a transparent surface.
    pub fn to_surface(&self) -> Surface {
        let mut surface = Surface::new(self.pixel_size());
        for (x, y, tile) in self.cells() {
            surface.blit(&tile.image, self.cell_rect(x, y).top_left());
        }
        surface
    }
}
