//! Full-frame rendering: pixel grid → plane → escape speed → colour.
//!
//! A [`RenderRequest`] is a `Copy` snapshot of everything a frame depends on,
//! so the transform and parameter `c` cannot change while a frame is being
//! computed. The returned [`PixelBuffer`] is always complete.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::{FrameSize, FrameSizeError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::transform::Transform;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::colour_mapping::factory::julia_colour_map_factory;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::params::JuliaParams;

/// How the per-pixel escape computation is scheduled. Both strategies
/// produce identical frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Single-threaded, row-major.
    #[default]
    Serial,
    /// Rows computed on rayon's thread pool.
    Rayon,
}

impl RenderStrategy {
    pub const ALL: &'static [Self] = &[Self::Serial, Self::Rayon];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "Serial",
            Self::Rayon => "Rayon",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    FrameSize(FrameSizeError),
    Julia(JuliaError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSize(err) => write!(f, "invalid frame size: {}", err),
            Self::Julia(err) => write!(f, "invalid julia parameters: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameSize(err) => Some(err),
            Self::Julia(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<FrameSizeError> for RenderError {
    fn from(err: FrameSizeError) -> Self {
        Self::FrameSize(err)
    }
}

impl From<JuliaError> for RenderError {
    fn from(err: JuliaError) -> Self {
        Self::Julia(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Immutable description of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub size: FrameSize,
    pub transform: Transform,
    pub params: JuliaParams,
    pub colour_map_kind: JuliaColourMapKinds,
    pub strategy: RenderStrategy,
}

pub fn render_frame(request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
    let start = Instant::now();
    let algorithm = JuliaAlgorithm::new(request.size, request.transform, request.params);

    let speeds = match request.strategy {
        RenderStrategy::Serial => generate_fractal(&algorithm),
        RenderStrategy::Rayon => generate_fractal_rayon(&algorithm),
    };

    let colour_map = julia_colour_map_factory(request.colour_map_kind, request.params.max_iterations());
    let pixel_buffer = generate_pixel_buffer(speeds, &colour_map, request.size)?;

    debug!(
        "rendered {}x{} frame ({}, {} iterations max) in {:?}",
        request.size.width(),
        request.size.height(),
        request.strategy.display_name(),
        request.params.max_iterations(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}

/// Renders a single-threaded frame with the default colour map.
///
/// Invalid dimensions, a radius not above one, or zero iterations fail before
/// any pixel is computed.
pub fn render(
    width: u32,
    height: u32,
    transform: Transform,
    c: Complex,
    radius: f64,
    max_iterations: u32,
) -> Result<PixelBuffer, RenderError> {
    let request = RenderRequest {
        size: FrameSize::new(width, height)?,
        transform,
        params: JuliaParams::new(c, radius, max_iterations)?,
        colour_map_kind: JuliaColourMapKinds::default(),
        strategy: RenderStrategy::Serial,
    };

    render_frame(&request)
}
