//! Frame-timed sprite playback.

use std::path::Path;

use super::{AnimationError, Clock, Frame, GifResourceDecoder, ResourceDecoder};
use crate::surface::{Mask, Size, Surface};

/// Looping sequence of timed frames.
///
/// Playback position is `elapsed_time`, which wraps modulo the cycle length
/// (the last frame's end time) on every advance.
///
/// Usage:
/// ```ignore
/// let mut sprite = AnimatedSprite::from_resource("walk.gif")?;
/// let mut clock = SystemClock::new();
/// loop {
///     sprite.update(&mut clock);
///     screen.blit(sprite.current_image(), (x, y));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    frames: Vec<Frame>,
    /// Collision mask per frame, same order as `frames`.
    masks: Vec<Mask>,
    elapsed_time: u32,
    cycle_duration: u32,
    /// Index of the frame shown at `elapsed_time`.
    current: usize,
}

impl AnimatedSprite {
    /// Build from explicit frames.
    ///
    /// The first window must start at 0, every window must be non-empty and
    /// windows must not overlap. Gaps between windows are accepted; during a
    /// gap the most recently started frame stays visible.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self, AnimationError> {
        validate_windows(&frames)?;

        let cycle_duration = frames.last().map_or(0, Frame::end_time);
        let masks = frames.iter().map(|f| Mask::from_surface(f.image())).collect();

        let mut sprite = Self {
            frames,
            masks,
            elapsed_time: 0,
            cycle_duration,
            current: 0,
        };
        sprite.current = sprite.frame_index_at(0);
        Ok(sprite)
    }

    /// Build from images shown back to back for the given durations (ms).
    pub fn from_durations<I>(images: I) -> Result<Self, AnimationError>
    where
        I: IntoIterator<Item = (Surface, u32)>,
    {
        let mut start = 0u32;
        let frames = images
            .into_iter()
            .map(|(image, duration)| {
                let end = start.saturating_add(duration);
                let frame = Frame::new(image, start, end);
                start = end;
                frame
            })
            .collect();
        Self::from_frames(frames)
    }

    /// Decode an animated GIF.
    pub fn from_resource<P: AsRef<Path>>(path: P) -> Result<Self, AnimationError> {
        Self::from_resource_with(path, &GifResourceDecoder)
    }

    /// Decode a resource with a caller-supplied decoder.
    pub fn from_resource_with<P, D>(path: P, decoder: &D) -> Result<Self, AnimationError>
    where
        P: AsRef<Path>,
        D: ResourceDecoder + ?Sized,
    {
        Self::from_durations(decoder.decode(path.as_ref())?)
    }

    /// Advance playback by `delta_ms`, looping at the end of the cycle.
    pub fn advance(&mut self, delta_ms: u32) {
        let elapsed = (self.elapsed_time as u64 + delta_ms as u64) % self.cycle_duration as u64;
        self.elapsed_time = elapsed as u32;
        self.current = self.frame_index_at(self.elapsed_time);
    }

    /// Advance by however much time the clock reports.
    pub fn update<C: Clock + ?Sized>(&mut self, clock: &mut C) {
        self.advance(clock.get_time());
    }

    /// Restart playback from the first frame.
    pub fn rewind(&mut self) {
        self.elapsed_time = 0;
        self.current = self.frame_index_at(0);
    }

    /// Linear scan for the frame shown at `time`.
    fn frame_index_at(&self, time: u32) -> usize {
        let mut held = 0;
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.contains(time) {
                return i;
            }
            if frame.start_time() <= time {
                held = i;
            }
        }
        held
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    #[inline]
    pub fn current_image(&self) -> &Surface {
        self.frames[self.current].image()
    }

    #[inline]
    pub fn current_mask(&self) -> &Mask {
        &self.masks[self.current]
    }

    /// Per-axis maximum over all frame images.
    pub fn largest_frame_size(&self) -> Size {
        self.frames
            .iter()
            .fold(Size::default(), |acc, frame| acc.max(frame.size()))
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn elapsed_time(&self) -> u32 {
        self.elapsed_time
    }

    #[inline]
    pub fn cycle_duration(&self) -> u32 {
        self.cycle_duration
    }
}

fn validate_windows(frames: &[Frame]) -> Result<(), AnimationError> {
    if frames.is_empty() {
        return Err(AnimationError::EmptyFrames);
    }

    let mut previous_end = 0;
    for (index, frame) in frames.iter().enumerate() {
        let invalid = |reason: &'static str| AnimationError::InvalidWindow {
            index,
            start: frame.start_time(),
            end: frame.end_time(),
            reason,
        };

        if frame.end_time() <= frame.start_time() {
            return Err(invalid("window is empty"));
        }
        if index == 0 && frame.start_time() != 0 {
            return Err(invalid("first frame must start at 0"));
        }
        if frame.start_time() < previous_end {
            return Err(invalid("window overlaps the previous frame"));
        }
        previous_end = frame.end_time();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FixedStepClock;
    use crate::animation::decode::tests::write_solid_gif;
    use crate::surface::Color;
    use image::Rgba;
    use proptest::prelude::*;

    const RED: Color = Rgba([255, 0, 0, 255]);
    const GREEN: Color = Rgba([0, 255, 0, 255]);
    const BLUE: Color = Rgba([0, 0, 255, 255]);

    fn solid(size: (u32, u32), color: Color) -> Surface {
        Surface::filled(size.into(), color)
    }

    fn two_frame_sprite() -> AnimatedSprite {
        AnimatedSprite::from_frames(vec![
            Frame::new(solid((10, 10), RED), 0, 1000),
            Frame::new(solid((10, 10), GREEN), 1000, 2000),
        ])
        .unwrap()
    }

    #[test]
    fn test_animation_with_clock() {
        let mut sprite = two_frame_sprite();
        let mut clock = FixedStepClock::new(1000);

        assert!(sprite.current_image().same_pixels(&solid((10, 10), RED)));

        sprite.update(&mut clock);
        assert!(sprite.current_image().same_pixels(&solid((10, 10), GREEN)));

        // Looping back to the start
        sprite.update(&mut clock);
        assert!(sprite.current_image().same_pixels(&solid((10, 10), RED)));
    }

    #[test]
    fn test_advance_zero_shows_first_frame() {
        let mut sprite = two_frame_sprite();
        sprite.advance(0);
        assert_eq!(sprite.current_index(), 0);
        assert!(sprite.current_frame().contains(0));
    }

    #[test]
    fn test_advance_wraps_elapsed_time() {
        let mut sprite = two_frame_sprite();
        sprite.advance(2500);
        assert_eq!(sprite.elapsed_time(), 500);
        assert_eq!(sprite.current_index(), 0);

        sprite.advance(u32::MAX);
        assert!(sprite.elapsed_time() < sprite.cycle_duration());
    }

    #[test]
    fn test_rewind() {
        let mut sprite = two_frame_sprite();
        sprite.advance(1500);
        assert_eq!(sprite.current_index(), 1);

        sprite.rewind();
        assert_eq!(sprite.elapsed_time(), 0);
        assert_eq!(sprite.current_index(), 0);
    }

    #[test]
    fn test_largest_frame_size() {
        assert_eq!(two_frame_sprite().largest_frame_size(), Size::new(10, 10));

        let mixed = AnimatedSprite::from_durations(vec![
            (solid((12, 3), RED), 100),
            (solid((4, 9), GREEN), 100),
        ])
        .unwrap();
        assert_eq!(mixed.largest_frame_size(), Size::new(12, 9));
    }

    #[test]
    fn test_gap_holds_previous_frame() {
        let mut sprite = AnimatedSprite::from_frames(vec![
            Frame::new(solid((1, 1), RED), 0, 100),
            Frame::new(solid((1, 1), GREEN), 200, 300),
            Frame::new(solid((1, 1), BLUE), 300, 400),
        ])
        .unwrap();

        sprite.advance(150);
        assert_eq!(sprite.current_index(), 0);

        sprite.advance(100);
        assert_eq!(sprite.current_index(), 1);
    }

    #[test]
    fn test_masks_follow_current_frame() {
        let mut sprite = AnimatedSprite::from_durations(vec![
            (solid((2, 2), RED), 10),
            (Surface::new(Size::new(2, 2)), 10),
        ])
        .unwrap();

        assert_eq!(sprite.current_mask().count(), 4);
        sprite.advance(10);
        assert_eq!(sprite.current_mask().count(), 0);
    }

    #[test]
    fn test_empty_frames_rejected() {
        let result = AnimatedSprite::from_frames(vec![]);
        assert!(matches!(result, Err(AnimationError::EmptyFrames)));
    }

    #[test]
    fn test_invalid_windows_rejected() {
        let empty_window = AnimatedSprite::from_frames(vec![Frame::new(solid((1, 1), RED), 0, 0)]);
        assert!(matches!(
            empty_window,
            Err(AnimationError::InvalidWindow { index: 0, .. })
        ));

        let late_start = AnimatedSprite::from_frames(vec![Frame::new(solid((1, 1), RED), 5, 10)]);
        assert!(matches!(
            late_start,
            Err(AnimationError::InvalidWindow { index: 0, .. })
        ));

        let overlapping = AnimatedSprite::from_frames(vec![
            Frame::new(solid((1, 1), RED), 0, 100),
            Frame::new(solid((1, 1), GREEN), 50, 150),
        ]);
        assert!(matches!(
            overlapping,
            Err(AnimationError::InvalidWindow { index: 1, .. })
        ));
    }

    #[test]
    fn test_from_resource() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animatedsprite.gif");
        write_solid_gif(&path, (10, 10), &[[255, 0, 0], [0, 255, 0]], 1000);

        let mut sprite = AnimatedSprite::from_resource(&path).unwrap();
        assert_eq!(sprite.largest_frame_size(), Size::new(10, 10));
        assert_eq!(sprite.cycle_duration(), 2000);
        assert!(sprite.current_image().same_pixels(&solid((10, 10), RED)));

        sprite.update(&mut FixedStepClock::new(1000));
        assert!(sprite.current_image().same_pixels(&solid((10, 10), GREEN)));
    }

    #[test]
    fn test_from_resource_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let result = AnimatedSprite::from_resource(&path);
        assert!(matches!(result, Err(AnimationError::Decode { .. })));
    }

    proptest! {
        #[test]
        fn prop_full_cycle_returns_to_same_frame(
            durations in prop::collection::vec(1u32..500, 1..8),
            delta in 0u32..10_000,
        ) {
            let images = durations
                .iter()
                .map(|&d| (Surface::new(Size::new(1, 1)), d));
            let mut sprite = AnimatedSprite::from_durations(images).unwrap();

            sprite.advance(delta);
            let index = sprite.current_index();
            let elapsed = sprite.elapsed_time();

            sprite.advance(sprite.cycle_duration());
            prop_assert_eq!(sprite.current_index(), index);
            prop_assert_eq!(sprite.elapsed_time(), elapsed);
            prop_assert!(sprite.current_frame().contains(elapsed));
        }
    }
}
