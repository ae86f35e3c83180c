use crate::core::{data::complex::Complex, fractals::julia::errors::JuliaError};

/// Validated inputs of the escape iteration for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    c: Complex,
    radius: f64,
    max_iterations: u32,
}

impl JuliaParams {
    /// The parameter `c` is not validated: a non-finite `c` is handled by the
    /// escape iteration itself.
    pub fn new(c: Complex, radius: f64, max_iterations: u32) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        // log2(log2(mag)) is only real once mag > radius > 1.
        if !radius.is_finite() || radius <= 1.0 {
            return Err(JuliaError::InvalidRadius { radius });
        }

        Ok(Self {
            c,
            radius,
            max_iterations,
        })
    }

    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
