use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::transform::Transform;
use crate::core::fractals::julia::params::JuliaParams;

/// Smooth escape time of `point` under `z <- z^2 + c`.
///
/// Returns `i - log2(log2(|z|))` clamped to `[0, max_iterations]` for the
/// first iteration `i` where `|z| > radius`, or exactly `max_iterations` if
/// the orbit stays bounded. A non-finite `|z|` counts as escaped at the current iteration, so
/// the result is never NaN.
#[must_use]
pub fn escape(point: Complex, c: Complex, radius: f64, max_iterations: u32) -> f64 {
    let mut z = point;

    for iteration in 0..max_iterations {
        z = z * z + c;

        let magnitude = z.magnitude();

        if !magnitude.is_finite() {
            return f64::from(iteration);
        }

        if magnitude > radius {
            let smooth = f64::from(iteration) - magnitude.log2().log2();

            // NaN once radius < |z| < 1
            if smooth.is_nan() {
                return f64::from(iteration);
            }

            return smooth.clamp(0.0, f64::from(max_iterations));
        }
    }

    f64::from(max_iterations)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    size: FrameSize,
    transform: Transform,
    params: JuliaParams,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = f64;

    fn compute(&self, pixel: Point) -> Self::Success {
        let z = self
            .transform
            .from_pixel(f64::from(pixel.x), f64::from(pixel.y));

        escape(
            z,
            self.params.c(),
            self.params.radius(),
            self.params.max_iterations(),
        )
    }

    fn size(&self) -> FrameSize {
        self.size
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(size: FrameSize, transform: Transform, params: JuliaParams) -> Self {
        Self {
            size,
            transform,
            params,
        }
    }
}
