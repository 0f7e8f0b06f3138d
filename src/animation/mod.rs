//! Animation module - Timed frames and looping sprite playback.
//!
//! An [`AnimatedSprite`] owns an ordered list of [`Frame`]s, each visible for
//! a half-open window of milliseconds. Playback is driven by advancing
//! elapsed time, either directly or from a [`Clock`]:
//!
//! ```text
//! frames:   [ red: 0..1000 ) [ green: 1000..2000 )
//! elapsed:  0 ──advance(1000)──> 1000 ──advance(1000)──> 0 (wrapped)
//! ```
//!
//! Multi-frame resources (animated GIFs) are decoded through a
//! [`ResourceDecoder`]; the default one uses `image::codecs::gif`.

mod animated;
mod clock;
pub(crate) mod decode;
mod error;
mod frame;

pub use animated::AnimatedSprite;
pub use clock::{Clock, FixedStepClock, SystemClock};
pub use decode::{DEFAULT_FRAME_DELAY_MS, GifResourceDecoder, ResourceDecoder};
pub use error::AnimationError;
pub use frame::Frame;
