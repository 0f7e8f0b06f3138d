//! Animation construction and decoding errors.

/// Errors raised while building an [`AnimatedSprite`](super::AnimatedSprite).
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation needs at least one frame")]
    EmptyFrames,
    #[error("Frame {index} has invalid window [{start}, {end}): {reason}")]
    InvalidWindow {
        index: usize,
        start: u32,
        end: u32,
        reason: &'static str,
    },
    #[error("Failed to decode animation {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
