//! Surface module - Pixel buffers, geometry and collision masks.
//!
//! Everything that touches pixels goes through [`Surface`], a thin owner of an
//! `image::RgbaImage`. Allocation, blitting and sub-region extraction are
//! delegated to `image::imageops`.

mod buffer;
mod geometry;
mod mask;

pub use buffer::*;
pub use geometry::*;
pub use mask::*;
