use crate::core::{
    actions::render_frame::{RenderRequest, RenderStrategy},
    data::{complex::Complex, frame_size::FrameSize, transform::Transform},
    fractals::julia::{
        colour_mapping::kinds::JuliaColourMapKinds, errors::JuliaError, params::JuliaParams,
    },
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 500;
pub const DEFAULT_RADIUS: f64 = 3.0;
pub const DEFAULT_PARAMETER: Complex = Complex::new(-0.4, 0.6);

/// Render settings that persist across frames of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub c: Complex,
    pub radius: f64,
    pub max_iterations: u32,
    pub colour_map_kind: JuliaColourMapKinds,
    pub strategy: RenderStrategy,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            c: DEFAULT_PARAMETER,
            radius: DEFAULT_RADIUS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: JuliaColourMapKinds::default(),
            strategy: RenderStrategy::default(),
        }
    }
}

impl JuliaConfig {
    pub fn params(&self) -> Result<JuliaParams, JuliaError> {
        JuliaParams::new(self.c, self.radius, self.max_iterations)
    }

    pub(crate) fn build_render_request(
        &self,
        size: FrameSize,
        transform: Transform,
    ) -> Result<RenderRequest, JuliaError> {
        Ok(RenderRequest {
            size,
            transform,
            params: self.params()?,
            colour_map_kind: self.colour_map_kind,
            strategy: self.strategy,
        })
    }

    pub fn reset_detail(&mut self) {
        self.radius = DEFAULT_RADIUS;
        self.max_iterations = DEFAULT_MAX_ITERATIONS;
    }
}
