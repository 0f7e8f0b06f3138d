//! A single timed animation frame.

use crate::surface::{Size, Surface};

/// One image plus the half-open window `[start_time, end_time)` (in
/// milliseconds from the start of the cycle) during which it is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: Surface,
    start_time: u32,
    end_time: u32,
}

impl Frame {
    /// Create a frame. Windows are checked when frames are assembled into an
    /// [`AnimatedSprite`](super::AnimatedSprite).
    pub fn new(image: Surface, start_time: u32, end_time: u32) -> Self {
        Self {
            image,
            start_time,
            end_time,
        }
    }

    #[inline]
    pub fn image(&self) -> &Surface {
        &self.image
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.image.size()
    }

    #[inline]
    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> u32 {
        self.end_time
    }

    /// Length of the window. Zero for malformed windows.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end_time.saturating_sub(self.start_time)
    }

    /// Check if `time` falls inside this frame's window.
    #[inline]
    pub fn contains(&self, time: u32) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_half_open() {
        let frame = Frame::new(Surface::new(Size::new(1, 1)), 100, 200);
        assert!(!frame.contains(99));
        assert!(frame.contains(100));
        assert!(frame.contains(199));
        assert!(!frame.contains(200));
        assert_eq!(frame.duration(), 100);
    }
}
