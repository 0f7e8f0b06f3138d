//! Camera module - Scrolling viewports over a world surface.
//!
//! A [`Camera`] owns two surfaces: the world it looks at and the output it
//! renders into. Where the viewport lands for a given focus rectangle is
//! decided by a [`Behavior`]:
//!
//! - [`CameraBehavior::Bounded`]: viewport top-left = focus top-left, errors
//!   when the viewport would leave the world.
//! - [`CameraBehavior::Center`]: viewport centered on the focus, clamped to
//!   the world edges.

mod behavior;
#[allow(clippy::module_inception)]
mod camera;

pub use behavior::*;
pub use camera::*;
