use crate::core::data::complex::Complex;
use crate::core::data::screen::{ScreenPoint, ScreenSize};
use crate::core::view::limits::ViewLimits;

/// Where the viewport sits in the Gaussian plane and how deep it iterates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Gaussian point at the viewport centre.
    pub position: Complex,
    /// Logical pixels per unit of the Gaussian plane.
    pub scale: f64,
    pub iterations: u32,
    limits: ViewLimits,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewLimits::default())
    }
}

impl ViewState {
    #[must_use]
    pub fn new(limits: ViewLimits) -> Self {
        Self {
            position: Complex::ZERO.clamp_components(limits.min_position, limits.max_position),
            scale: limits.min_scale,
            iterations: limits.initial_iterations,
            limits,
        }
    }

    #[must_use]
    pub fn limits(&self) -> &ViewLimits {
        &self.limits
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }

    /// Moves the view so the plane follows a cursor drag of `delta`.
    pub fn pan_by(&mut self, delta: ScreenPoint) {
        self.position = self.clamp_position(self.position - self.screen_offset(delta));
    }

    /// Rescales by `2^(wheel_factor * wheel_delta)`, keeping the Gaussian point
    /// under `cursor` fixed unless a clamp engages.
    pub fn zoom_at(&mut self, cursor: ScreenPoint, window: ScreenSize, wheel_delta: f64) {
        let delta = cursor - window.center();
        let anchor = self.screen_to_gaussian(cursor, window);

        let factor = (self.limits.wheel_factor * wheel_delta).exp2();
        self.scale = self.limits.clamp_scale(factor * self.scale);

        self.position = self.clamp_position(anchor - self.screen_offset(delta));
    }

    pub fn increase_iterations(&mut self) {
        self.iterations = self
            .iterations
            .saturating_add(self.limits.iteration_step)
            .min(self.limits.max_iterations);
    }

    pub fn decrease_iterations(&mut self) {
        self.iterations = self
            .iterations
            .saturating_sub(self.limits.iteration_step)
            .max(self.limits.min_iterations);
    }

    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = self.limits.clamp_iterations(iterations);
    }

    /// Half of the visible Gaussian extent along each axis.
    #[must_use]
    pub fn half_frame(&self, window: ScreenSize) -> Complex {
        Complex {
            real: 0.5 * window.width / self.scale,
            imag: 0.5 * window.height / self.scale,
        }
    }

    #[must_use]
    pub fn screen_to_gaussian(&self, point: ScreenPoint, window: ScreenSize) -> Complex {
        self.position + self.screen_offset(point - window.center())
    }

    /// Magnification relative to the outermost zoom level.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.scale / self.limits.min_scale
    }

    /// Plane displacement for a screen displacement; screen y grows downward.
    fn screen_offset(&self, delta: ScreenPoint) -> Complex {
        Complex {
            real: delta.x,
            imag: -delta.y,
        } * self.scale.recip()
    }

    fn clamp_position(&self, position: Complex) -> Complex {
        position.clamp_components(self.limits.min_position, self.limits.max_position)
    }
}
