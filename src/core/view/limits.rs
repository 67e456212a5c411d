use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewLimitsError {
    #[error("position range must be finite and non-empty: [{min}, {max}]")]
    PositionRange { min: f64, max: f64 },

    #[error("scale range must be positive and ordered: [{min}, {max}]")]
    ScaleRange { min: f64, max: f64 },

    #[error("iteration range is empty: [{min}, {max}]")]
    IterationRange { min: u32, max: u32 },

    #[error("initial iterations {initial} outside [{min}, {max}]")]
    InitialIterations { initial: u32, min: u32, max: u32 },

    #[error("iteration step must be greater than zero")]
    ZeroIterationStep,

    #[error("wheel factor must be finite and non-zero: {0}")]
    WheelFactor(f64),
}

/// Bounds and step sizes for navigating the Gaussian plane.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewLimits {
    pub min_position: f64,
    pub max_position: f64,
    /// Logical pixels per unit of the Gaussian plane.
    pub min_scale: f64,
    pub max_scale: f64,
    pub min_iterations: u32,
    pub max_iterations: u32,
    pub initial_iterations: u32,
    pub iteration_step: u32,
    /// One wheel line scales by `2^wheel_factor`.
    pub wheel_factor: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_position: -3.0,
            max_position: 3.0,
            min_scale: 75.0,
            max_scale: 100_000_000.0,
            min_iterations: 2,
            max_iterations: 1000,
            initial_iterations: 500,
            iteration_step: 10,
            wheel_factor: 0.25,
        }
    }
}

impl ViewLimits {
    pub fn validate(&self) -> Result<(), ViewLimitsError> {
        if !(self.min_position <= self.max_position
            && self.min_position.is_finite()
            && self.max_position.is_finite())
        {
            return Err(ViewLimitsError::PositionRange {
                min: self.min_position,
                max: self.max_position,
            });
        }

        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale && self.max_scale.is_finite()) {
            return Err(ViewLimitsError::ScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }

        if self.min_iterations > self.max_iterations {
            return Err(ViewLimitsError::IterationRange {
                min: self.min_iterations,
                max: self.max_iterations,
            });
        }

        if !(self.min_iterations..=self.max_iterations).contains(&self.initial_iterations) {
            return Err(ViewLimitsError::InitialIterations {
                initial: self.initial_iterations,
                min: self.min_iterations,
                max: self.max_iterations,
            });
        }

        if self.iteration_step == 0 {
            return Err(ViewLimitsError::ZeroIterationStep);
        }

        if !self.wheel_factor.is_finite() || self.wheel_factor == 0.0 {
            return Err(ViewLimitsError::WheelFactor(self.wheel_factor));
        }

        Ok(())
    }

    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    #[must_use]
    pub fn clamp_iterations(&self, iterations: u32) -> u32 {
        iterations.clamp(self.min_iterations, self.max_iterations)
    }
}
