//! Scrollable, scalable view onto a larger world surface.

use super::{Behavior, CameraBehavior, CameraError};
use crate::schema::{CameraConfig, ConfigError};
use crate::surface::{Rect, Size, Surface};

/// A camera over a world ("source") surface.
///
/// The camera captures the `focus_size` region of the source at its current
/// offset and scales it into an output surface of `output_size`. The camera
/// can itself be blitted anywhere a [`Surface`] can, which draws the output.
///
/// Usage:
/// ```ignore
/// let mut camera = Camera::with_behavior(world, screen, focus, CameraBehavior::Center);
/// camera.blit(&tiles, (0, 0));
/// camera.scroll_to(player.rect())?;
/// screen.blit(&camera, (0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Camera<B: Behavior = CameraBehavior> {
    source: Surface,
    output: Surface,
    focus_size: Size,
    behavior: B,
    offset: (i32, i32),
}

impl Camera<CameraBehavior> {
    /// Camera with the default bounded behavior.
    pub fn new(source_size: Size, output_size: Size, focus_size: Size) -> Self {
        Self::with_behavior(
            source_size,
            output_size,
            focus_size,
            CameraBehavior::default(),
        )
    }

    /// Camera from a validated configuration.
    pub fn from_config(config: &CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_behavior(
            config.source_size,
            config.output_size,
            config.focus_size,
            config.behavior,
        ))
    }
}

impl<B: Behavior> Camera<B> {
    /// Allocate the source and output surfaces. The viewport starts at the
    /// source origin.
    pub fn with_behavior(
        source_size: Size,
        output_size: Size,
        focus_size: Size,
        behavior: B,
    ) -> Self {
        log::debug!(
            "Camera: source {}x{}, focus {}x{} -> output {}x{}",
            source_size.width,
            source_size.height,
            focus_size.width,
            focus_size.height,
            output_size.width,
            output_size.height
        );

        let mut camera = Self {
            source: Surface::new(source_size),
            output: Surface::new(output_size),
            focus_size,
            behavior,
            offset: (0, 0),
        };
        camera.update();
        camera
    }

    /// Move the viewport according to the behavior and refresh the output.
    ///
    /// On error the offset is left unchanged.
    pub fn scroll_to(&mut self, focus: Rect) -> Result<(i32, i32), CameraError> {
        let offset = self
            .behavior
            .compute_offset(focus, self.source.size(), self.focus_size)?;
        log::trace!("Camera scroll to {:?} -> offset {:?}", focus, offset);

        self.offset = offset;
        self.update();
        Ok(offset)
    }

    /// Move the viewport relative to its current offset, under the same
    /// policy as [`scroll_to`](Self::scroll_to). The target saturates at the
    /// `i32` range, so huge deltas behave like a target at the far edge.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> Result<(i32, i32), CameraError> {
        let mut target = self.viewport();
        target.move_by(dx, dy);
        self.scroll_to(target)
    }

    /// Re-capture the viewport from the source into the output surface.
    pub fn update(&mut self) {
        let view = self.source.subsurface(self.viewport());
        self.output = view.scaled(self.output.size());
    }

    /// Draw onto the source (world space) and refresh the output.
    pub fn blit<S: AsRef<Surface> + ?Sized>(&mut self, image: &S, position: (i32, i32)) {
        self.source.blit(image, position);
        self.update();
    }

    /// Region of the source currently captured.
    #[inline]
    pub fn viewport(&self) -> Rect {
        Rect::from_position(self.offset, self.focus_size)
    }

    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    #[inline]
    pub fn focus_size(&self) -> Size {
        self.focus_size
    }

    #[inline]
    pub fn output_size(&self) -> Size {
        self.output.size()
    }

    pub fn source_surface(&self) -> &Surface {
        &self.source
    }

    /// Direct access to the world surface. Call [`update`](Self::update)
    /// afterwards to refresh the output.
    pub fn source_surface_mut(&mut self) -> &mut Surface {
        &mut self.source
    }

    /// The rendered output.
    pub fn surface(&self) -> &Surface {
        &self.output
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Swap the behavior. The current offset is kept until the next scroll.
    pub fn set_behavior(&mut self, behavior: B) {
        self.behavior = behavior;
    }
}

impl<B: Behavior> AsRef<Surface> for Camera<B> {
    fn as_ref(&self) -> &Surface {
        &self.output
    }
}
