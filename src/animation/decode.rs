//! Decoding multi-frame image resources into timed images.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use super::AnimationError;
use crate::surface::Surface;

/// Delay used for frames that declare none (browsers do the same).
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Source of `(image, duration_ms)` pairs for an animation resource.
pub trait ResourceDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<(Surface, u32)>, AnimationError>;
}

/// Animated GIF decoder backed by `image::codecs::gif`.
///
/// Frames come back fully composited at the canvas size.
#[derive(Debug, Clone, Copy, Default)]
pub struct GifResourceDecoder;

impl ResourceDecoder for GifResourceDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<(Surface, u32)>, AnimationError> {
        let decode_error = |source| AnimationError::Decode {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(|e| decode_error(image::ImageError::IoError(e)))?;
        let decoder = GifDecoder::new(BufReader::new(file)).map_err(decode_error)?;
        let frames = decoder.into_frames().collect_frames().map_err(decode_error)?;

        log::debug!("Decoded {} frames from {}", frames.len(), path.display());

        Ok(frames
            .into_iter()
            .map(|frame| {
                let (numer, denom) = frame.delay().numer_denom_ms();
                let delay = if denom == 0 { 0 } else { numer / denom };
                let delay = if delay == 0 {
                    DEFAULT_FRAME_DELAY_MS
                } else {
                    delay
                };
                (Surface::from_image(frame.into_buffer()), delay)
            })
            .collect())
    }
}
