//! Sprite module - Collision geometry derived from animated images.

mod animatable;
mod physical;

pub use animatable::*;
pub use physical::*;
