//! Sprites with a position and collision data.

use super::Animatable;
use crate::surface::{Mask, Rect, Surface};

/// Positioned wrapper that mirrors an [`Animatable`]'s size and mask.
///
/// `rect` and `mask` are caches of the wrapped sprite's current appearance.
/// They are re-derived after every [`update_state`](Self::update_state);
/// the position part of `rect` belongs to this wrapper and is never touched
/// by an update.
#[derive(Debug)]
pub struct PhysicalSprite<'a, A: Animatable + ?Sized> {
    sprite: &'a mut A,
    rect: Rect,
    mask: Mask,
}

impl<'a, A: Animatable + ?Sized> PhysicalSprite<'a, A> {
    /// Wrap `sprite`, positioned at the origin.
    pub fn new(sprite: &'a mut A) -> Self {
        let rect = Rect::from_position((0, 0), sprite.size());
        let mask = sprite.mask().clone();
        Self { sprite, rect, mask }
    }

    /// Wrap `sprite` with its top-left corner at `position`.
    pub fn at(sprite: &'a mut A, position: (i32, i32)) -> Self {
        let mut physical = Self::new(sprite);
        physical.rect.set_position(position);
        physical
    }

    /// Update the wrapped sprite, then re-sync `rect` size and `mask`.
    ///
    /// If the wrapped sprite fails, the caches keep their previous values.
    pub fn update_state(&mut self, delta_ms: u32) -> Result<(), A::Error> {
        self.sprite.update_state(delta_ms)?;
        self.rect.set_size(self.sprite.size());
        self.mask.clone_from(self.sprite.mask());
        Ok(())
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Mutable access for positioning. Size changes are overwritten by the
    /// next update.
    #[inline]
    pub fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    #[inline]
    pub fn set_position(&mut self, position: (i32, i32)) {
        self.rect.set_position(position);
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        self.rect.top_left()
    }

    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    #[inline]
    pub fn image(&self) -> &Surface {
        self.sprite.image()
    }

    pub fn sprite(&self) -> &A {
        &*self.sprite
    }

    /// Pixel-perfect collision test: bounding rectangles first, then masks
    /// at their relative offset.
    pub fn collides_with<B: Animatable + ?Sized>(&self, other: &PhysicalSprite<'_, B>) -> bool {
        if !self.rect.intersects(&other.rect) {
            return false;
        }
        let offset = (
            other.rect.x.saturating_sub(self.rect.x),
            other.rect.y.saturating_sub(self.rect.y),
        );
        self.mask.overlaps(&other.mask, offset)
    }
}
