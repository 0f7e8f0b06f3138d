//! The capability a [`PhysicalSprite`](super::PhysicalSprite) needs from the
//! thing it wraps.

use std::convert::Infallible;

use crate::animation::AnimatedSprite;
use crate::surface::{Mask, Size, Surface};

/// Something whose appearance changes over time.
pub trait Animatable {
    type Error;

    /// Advance internal state by `delta_ms` milliseconds.
    fn update_state(&mut self, delta_ms: u32) -> Result<(), Self::Error>;

    /// Collision mask for the current appearance.
    fn mask(&self) -> &Mask;

    /// Size of the current appearance.
    fn size(&self) -> Size;

    /// Image to draw for the current appearance.
    fn image(&self) -> &Surface;
}

impl Animatable for AnimatedSprite {
    type Error = Infallible;

    fn update_state(&mut self, delta_ms: u32) -> Result<(), Self::Error> {
        self.advance(delta_ms);
        Ok(())
    }

    fn mask(&self) -> &Mask {
        self.current_mask()
    }

    fn size(&self) -> Size {
        self.current_image().size()
    }

    fn image(&self) -> &Surface {
        self.current_image()
    }
}

/// A single unchanging image.
#[derive(Debug, Clone)]
pub struct StaticSprite {
    image: Surface,
    mask: Mask,
}

impl StaticSprite {
    pub fn new(image: Surface) -> Self {
        let mask = Mask::from_surface(&image);
        Self { image, mask }
    }
}

impl Animatable for StaticSprite {
    type Error = Infallible;

    fn update_state(&mut self, _delta_ms: u32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn mask(&self) -> &Mask {
        &self.mask
    }

    fn size(&self) -> Size {
        self.image.size()
    }

    fn image(&self) -> &Surface {
        &self.image
    }
}
