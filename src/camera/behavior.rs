//! Viewport placement strategies.

use serde::{Deserialize, Serialize};

use crate::surface::{Rect, Size};

/// Camera errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error(
        "Viewport {}x{} at ({}, {}) falls outside the {}x{} source surface",
        .viewport.width, .viewport.height, .offset.0, .offset.1, .bounds.width, .bounds.height
    )]
    OutOfBounds {
        offset: (i32, i32),
        viewport: Size,
        bounds: Size,
    },
}

/// Maps a focus rectangle to the top-left offset of the camera viewport.
pub trait Behavior {
    fn compute_offset(
        &self,
        focus: Rect,
        source: Size,
        viewport: Size,
    ) -> Result<(i32, i32), CameraError>;
}

/// Built-in placement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraBehavior {
    /// Viewport top-left goes to the focus top-left. Targets that would put
    /// any part of the viewport off the source surface are rejected.
    #[default]
    Bounded,
    /// Viewport is centered on the focus center, saturating at the source
    /// edges. Never fails.
    Center,
}

impl Behavior for CameraBehavior {
    fn compute_offset(
        &self,
        focus: Rect,
        source: Size,
        viewport: Size,
    ) -> Result<(i32, i32), CameraError> {
        match self {
            CameraBehavior::Bounded => {
                let offset = focus.top_left();
                check_bounds(offset, source, viewport)?;
                Ok(offset)
            }
            CameraBehavior::Center => {
                let (cx, cy) = focus.center();
                let x = cx - (viewport.width / 2) as i64;
                let y = cy - (viewport.height / 2) as i64;
                Ok((
                    clamp_axis(x, source.width, viewport.width),
                    clamp_axis(y, source.height, viewport.height),
                ))
            }
        }
    }
}

/// Reject offsets whose viewport leaves `[0, source)` on either axis.
pub fn check_bounds(offset: (i32, i32), source: Size, viewport: Size) -> Result<(), CameraError> {
    let fits = |start: i32, len: u32, limit: u32| {
        start >= 0 && start as i64 + len as i64 <= limit as i64
    };
    if fits(offset.0, viewport.width, source.width) && fits(offset.1, viewport.height, source.height)
    {
        Ok(())
    } else {
        Err(CameraError::OutOfBounds {
            offset,
            viewport,
            bounds: source,
        })
    }
}

/// Clamp one axis into `[0, source - viewport]`, pinning to 0 when the
/// viewport is larger than the source. The result always fits in `i32`.
#[inline]
fn clamp_axis(value: i64, source: u32, viewport: u32) -> i32 {
    let max = source.saturating_sub(viewport).min(i32::MAX as u32) as i64;
    value.clamp(0, max) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounded_uses_top_left() {
        let offset = CameraBehavior::Bounded
            .compute_offset(Rect::new(1, 1, 1, 1), Size::new(3, 3), Size::new(2, 2))
            .unwrap();
        assert_eq!(offset, (1, 1));
    }

    #[test]
    fn test_bounded_rejects_far_edge() {
        let result = CameraBehavior::Bounded.compute_offset(
            Rect::new(2000, 2000, 32, 32),
            Size::new(1080, 1050),
            Size::new(300, 300),
        );
        assert_eq!(
            result,
            Err(CameraError::OutOfBounds {
                offset: (2000, 2000),
                viewport: Size::new(300, 300),
                bounds: Size::new(1080, 1050),
            })
        );

        // One pixel past the edge on a single axis is enough
        let result = CameraBehavior::Bounded.compute_offset(
            Rect::new(781, 0, 1, 1),
            Size::new(1080, 1050),
            Size::new(300, 300),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bounded_rejects_negative() {
        let result = CameraBehavior::Bounded.compute_offset(
            Rect::new(0, -1, 1, 1),
            Size::new(10, 10),
            Size::new(2, 2),
        );
        assert!(matches!(result, Err(CameraError::OutOfBounds { .. })));
    }

    #[test]
    fn test_center_clamps_and_centers() {
        let source = Size::new(7, 7);
        let viewport = Size::new(3, 3);
        let center = CameraBehavior::Center;

        assert_eq!(
            center.compute_offset(Rect::new(0, 0, 1, 1), source, viewport),
            Ok((0, 0))
        );
        assert_eq!(
            center.compute_offset(Rect::new(3, 3, 1, 1), source, viewport),
            Ok((2, 2))
        );
        assert_eq!(
            center.compute_offset(Rect::new(5, 5, 1, 1), source, viewport),
            Ok((4, 4))
        );
        assert_eq!(
            center.compute_offset(Rect::new(-50, 90, 1, 1), source, viewport),
            Ok((0, 4))
        );
    }

    #[test]
    fn test_center_viewport_larger_than_source() {
        let offset = CameraBehavior::Center
            .compute_offset(Rect::new(10, 10, 1, 1), Size::new(4, 4), Size::new(8, 8))
            .unwrap();
        assert_eq!(offset, (0, 0));
    }

    #[test]
    fn test_center_extreme_focus() {
        let source = Size::new(8, 8);
        let viewport = Size::new(4, 4);
        let center = CameraBehavior::Center;

        assert_eq!(
            center.compute_offset(Rect::new(i32::MIN, 0, 1, 1), source, viewport),
            Ok((0, 0))
        );
        assert_eq!(
            center.compute_offset(Rect::new(i32::MAX, 0, 4, 1), source, viewport),
            Ok((4, 0))
        );
        assert_eq!(
            center.compute_offset(
                Rect::new(i32::MAX, i32::MAX, u32::MAX, u32::MAX),
                source,
                viewport
            ),
            Ok((4, 4))
        );
    }

    #[test]
    fn test_behavior_serde_names() {
        let json = serde_json::to_string(&CameraBehavior::Center).unwrap();
        assert_eq!(json, "\"center\"");
        let parsed: CameraBehavior = serde_json::from_str("\"bounded\"").unwrap();
        assert_eq!(parsed, CameraBehavior::Bounded);
    }

    proptest! {
        #[test]
        fn prop_center_offset_stays_on_surface(
            fx in -2000i32..2000,
            fy in -2000i32..2000,
            fw in 0u32..64,
            fh in 0u32..64,
            sw in 1u32..512,
            sh in 1u32..512,
            vw_seed in 0u32..512,
            vh_seed in 0u32..512,
        ) {
            let vw = 1 + vw_seed % sw;
            let vh = 1 + vh_seed % sh;
            let source = Size::new(sw, sh);
            let viewport = Size::new(vw, vh);

            let offset = CameraBehavior::Center
                .compute_offset(Rect::new(fx, fy, fw, fh), source, viewport)
                .unwrap();
            prop_assert!(check_bounds(offset, source, viewport).is_ok());
        }

        #[test]
        fn prop_bounded_accepts_only_in_bounds(
            fx in -600i32..600,
            fy in -600i32..600,
            sw in 1u32..512,
            sh in 1u32..512,
            vw in 1u32..512,
            vh in 1u32..512,
        ) {
            let source = Size::new(sw, sh);
            let viewport = Size::new(vw, vh);
            let result = CameraBehavior::Bounded
                .compute_offset(Rect::new(fx, fy, 1, 1), source, viewport);

            let in_bounds = fx >= 0
                && fy >= 0
                && fx as u32 + vw <= sw
                && fy as u32 + vh <= sh;
            prop_assert_eq!(result.is_ok(), in_bounds);
        }
    }
}
