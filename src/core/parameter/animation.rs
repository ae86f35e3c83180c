use std::f64::consts::TAU;
use std::time::Duration;

use crate::core::data::complex::Complex;

/// Radius of the circle traced by `c` while animating.
pub const ANIMATION_RADIUS: f64 = 0.7885;
/// Angle advanced per tick, in radians.
pub const ANIMATION_STEP: f64 = 0.1;
/// Wall time between ticks; the host owns the timer.
pub const ANIMATION_INTERVAL: Duration = Duration::from_millis(200);

/// Phase of `c` on the circle `0.7885 * (cos t, sin t)`.
///
/// The parameter is taken one step ahead of the stored angle, so the first
/// tick yields `c(0.2)` and the tick that wraps yields `c(0.1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterAnimation {
    angle: f64,
}

impl ParameterAnimation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advances one step, wrapping to zero once a full turn is reached, and
    /// returns the parameter one step ahead of the new angle.
    pub fn advance(&mut self) -> Complex {
        self.angle += ANIMATION_STEP;

        if self.angle >= TAU {
            self.angle = 0.0;
        }

        Self::parameter_at(self.angle + ANIMATION_STEP)
    }

    #[must_use]
    pub fn parameter_at(angle: f64) -> Complex {
        Complex {
            real: ANIMATION_RADIUS * angle.cos(),
            imag: ANIMATION_RADIUS * angle.sin(),
        }
    }
}
