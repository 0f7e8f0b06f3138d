//! Per-pixel collision masks.

use super::{Size, Surface};

/// Alpha values strictly above this count as solid.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 127;

/// Bitmap of solid pixels derived from a surface's alpha channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mask {
    width: u32,
    height: u32,
    /// Row-major solid flags.
    bits: Vec<bool>,
}

impl Mask {
    /// Empty (all clear) mask of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            bits: vec![false; size.area()],
        }
    }

    /// Mask where every pixel is set.
    pub fn full(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            bits: vec![true; size.area()],
        }
    }

    pub fn from_surface(surface: &Surface) -> Self {
        Self::from_surface_with_threshold(surface, DEFAULT_ALPHA_THRESHOLD)
    }

    pub fn from_surface_with_threshold(surface: &Surface, threshold: u8) -> Self {
        let bits = surface
            .as_image()
            .pixels()
            .map(|pixel| pixel.0[3] > threshold)
            .collect();
        Self {
            width: surface.width(),
            height: surface.height(),
            bits,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bit at (x, y); out-of-range coordinates are clear.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            self.bits[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// First point (in this mask's coordinates) where both masks are set,
    /// with `other` placed at `offset` relative to this mask.
    ///
    /// Scans row-major, so the returned point is the top-most, then
    /// left-most overlap.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (ox, oy) = (offset.0 as i64, offset.1 as i64);
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (self.width as i64).min(ox + other.width as i64);
        let y1 = (self.height as i64).min(oy + other.height as i64);

        // Coordinates inside both masks, so each narrows back to i32
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as i32, y as i32) && other.get((x - ox) as i32, (y - oy) as i32) {
                    return Some((x as i32, y as i32));
                }
            }
        }
        None
    }

    #[inline]
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        self.overlap(other, offset).is_some()
    }
}
