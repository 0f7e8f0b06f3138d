//! Spritecam - Animated sprites and scrolling cameras over pixel surfaces.
//!
//! This crate provides the moving parts of a small 2D scene: timed frame
//! animation, sprites with a position and collision mask, and a camera that
//! captures part of a world surface and scales it to an output.
//!
//! # Architecture
//!
//! - `surface`: RGBA pixel buffers, rectangles and collision masks
//! - `animation`: frames, looping animated sprites, clocks and GIF decoding
//! - `sprite`: positioned sprites that track an animatable's size and mask
//! - `camera`: scrollable, scalable viewports with pluggable behaviors
//! - `tilemap`: tilesheets, tile rules and CSV tile layers
//! - `schema`: configuration for cameras and headless scene runs
//!
//! # Example
//!
//! ```rust,no_run
//! use spritecam::{
//!     animation::AnimatedSprite,
//!     camera::{Camera, CameraBehavior},
//!     sprite::PhysicalSprite,
//!     surface::Size,
//! };
//!
//! let mut walk = AnimatedSprite::from_resource("walk.gif").unwrap();
//! let mut actor = PhysicalSprite::at(&mut walk, (40, 30));
//!
//! let mut camera = Camera::with_behavior(
//!     Size::new(640, 480),
//!     Size::new(320, 240),
//!     Size::new(160, 120),
//!     CameraBehavior::Center,
//! );
//!
//! actor.update_state(16).unwrap();
//! camera.blit(actor.image(), actor.position());
//! camera.scroll_to(actor.rect()).unwrap();
//! camera.surface().save("frame.png").unwrap();
//! ```

pub mod animation;
pub mod camera;
pub mod schema;
pub mod sprite;
pub mod surface;
pub mod tilemap;

// Re-export commonly used types
pub use animation::{AnimatedSprite, Frame};
pub use camera::{Camera, CameraBehavior};
pub use schema::{CameraConfig, SceneConfig};
pub use sprite::{Animatable, PhysicalSprite};
pub use surface::{Mask, Rect, Size, Surface};
