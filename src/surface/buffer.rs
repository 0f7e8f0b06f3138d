//! Owned RGBA pixel buffer.

use std::path::Path;

use image::imageops;
use image::{ImageFormat, Rgba, RgbaImage};

use super::{Rect, Size};

/// RGBA8 color.
pub type Color = Rgba<u8>;

/// Fully transparent black; the contents of a freshly allocated surface.
pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

/// Surface I/O errors.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("Failed to load image {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to save image {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Owned 2D pixel buffer.
///
/// Blitting is alpha-aware and clipped, so sources may be placed partially
/// (or entirely) outside the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(size: Size) -> Self {
        Self {
            image: RgbaImage::new(size.width, size.height),
        }
    }

    /// Allocate a surface filled with a single color.
    pub fn filled(size: Size, color: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(size.width, size.height, color),
        }
    }

    /// Wrap an existing RGBA image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Load a single image file (PNG or GIF first frame).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SurfaceError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| SurfaceError::Load {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(image.to_rgba8()))
    }

    /// Write the surface as a PNG file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| SurfaceError::Save {
                path: path.display().to_string(),
                source,
            })
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Rectangle covering the whole surface, anchored at the origin.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_position((0, 0), self.size())
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at (x, y), or `None` outside the surface.
    pub fn get_at(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(*self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Set a single pixel. Writes outside the surface are ignored.
    pub fn set_at(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Overwrite the pixels covered by `rect`, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.intersection(&self.rect()) else {
            return;
        };
        for y in 0..clip.height {
            for x in 0..clip.width {
                self.image
                    .put_pixel(clip.x as u32 + x, clip.y as u32 + y, color);
            }
        }
    }

    /// Composite `source` onto this surface with its top-left at `position`.
    ///
    /// Per-pixel alpha of the source is honoured; fully opaque pixels replace
    /// the destination exactly.
    pub fn blit<S: AsRef<Surface> + ?Sized>(&mut self, source: &S, position: (i32, i32)) {
        imageops::overlay(
            &mut self.image,
            &source.as_ref().image,
            position.0 as i64,
            position.1 as i64,
        );
    }

    /// Copy of the region under `rect`.
    ///
    /// The result always has the size of `rect`; parts of `rect` outside this
    /// surface come back transparent.
    pub fn subsurface(&self, rect: Rect) -> Surface {
        let mut out = Surface::new(rect.size());
        if let Some(clip) = rect.intersection(&self.rect()) {
            let part = imageops::crop_imm(
                &self.image,
                clip.x as u32,
                clip.y as u32,
                clip.width,
                clip.height,
            )
            .to_image();
            imageops::replace(
                &mut out.image,
                &part,
                clip.x as i64 - rect.x as i64,
                clip.y as i64 - rect.y as i64,
            );
        }
        out
    }

    /// Nearest-neighbour scaled copy.
    ///
    /// Destination pixel (x, y) samples source pixel
    /// `(x * src_w / dst_w, y * src_h / dst_h)`, so integer upscales are
    /// exact pixel replication. `imageops::resize` with `FilterType::Nearest`
    /// is not used: it picks source pixels through floating-point sample
    /// positions, and the camera needs the mapping above to be exact integer
    /// arithmetic on every size pair.
    pub fn scaled(&self, size: Size) -> Surface {
        if size == self.size() {
            return self.clone();
        }
        if size.is_empty() || self.size().is_empty() {
            return Surface::new(size);
        }
        let (sw, sh) = (self.width() as u64, self.height() as u64);
        let (dw, dh) = (size.width as u64, size.height as u64);
        let image = RgbaImage::from_fn(size.width, size.height, |x, y| {
            let sx = (x as u64 * sw / dw) as u32;
            let sy = (y as u64 * sh / dh) as u32;
            *self.image.get_pixel(sx, sy)
        });
        Surface { image }
    }

    /// Pixel-exact comparison of two surfaces (sizes included).
    pub fn same_pixels<S: AsRef<Surface> + ?Sized>(&self, other: &S) -> bool {
        let other = other.as_ref();
        self.size() == other.size() && self.image.as_raw() == other.image.as_raw()
    }
}

impl AsRef<Surface> for Surface {
    fn as_ref(&self) -> &Surface {
        self
    }
}
