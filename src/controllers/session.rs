//! Render session: the owned context a host drives between frames.
//!
//! Holds the frame size, the current transform, the parameter controller and
//! the render settings. Every change marks the session dirty; the host calls
//! [`RenderSession::render`] when it wants a frame, which snapshots the state
//! into a [`RenderRequest`] first.

use std::error::Error;
use std::fmt;

use log::debug;

use crate::core::actions::render_frame::{RenderError, render_frame};
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::{FrameSize, FrameSizeError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::transform::{Transform, TransformError};
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::parameter::controller::ParameterController;
use crate::core::parameter::presets::ParameterError;
use crate::input::viewport_input::ViewportCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    FrameSize(FrameSizeError),
    Transform(TransformError),
    Julia(JuliaError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSize(err) => write!(f, "invalid frame size: {}", err),
            Self::Transform(err) => write!(f, "invalid view change: {}", err),
            Self::Julia(err) => write!(f, "invalid julia settings: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameSize(err) => Some(err),
            Self::Transform(err) => Some(err),
            Self::Julia(err) => Some(err),
        }
    }
}

impl From<FrameSizeError> for SessionError {
    fn from(err: FrameSizeError) -> Self {
        Self::FrameSize(err)
    }
}

impl From<TransformError> for SessionError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err)
    }
}

impl From<JuliaError> for SessionError {
    fn from(err: JuliaError) -> Self {
        Self::Julia(err)
    }
}

#[derive(Debug, Clone)]
pub struct RenderSession {
    size: FrameSize,
    transform: Transform,
    parameter: ParameterController,
    config: JuliaConfig,
    dirty: bool,
}

impl RenderSession {
    /// The parameter controller starts at `config.c`.
    pub fn new(width: u32, height: u32, config: JuliaConfig) -> Result<Self, SessionError> {
        config.params()?;
        let size = FrameSize::new(width, height)?;

        Ok(Self {
            size,
            transform: Transform::for_frame(size),
            parameter: ParameterController::new(config.c),
            config,
            dirty: true,
        })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn config(&self) -> JuliaConfig {
        self.config
    }

    #[must_use]
    pub fn parameter(&self) -> &ParameterController {
        &self.parameter
    }

    /// New size resets the view to the default window.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SessionError> {
        let size = FrameSize::new(width, height)?;

        if size != self.size {
            debug!("session resized to {}x{}", width, height);
            self.size = size;
            self.transform = Transform::for_frame(size);
            self.dirty = true;
        }

        Ok(())
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), SessionError> {
        self.transform = self.transform.pan(dx, dy)?;
        self.dirty = true;

        Ok(())
    }

    pub fn zoom(&mut self, factor: f64, pivot_x: f64, pivot_y: f64) -> Result<(), SessionError> {
        self.transform = self.transform.zoom(factor, pivot_x, pivot_y)?;
        self.dirty = true;

        Ok(())
    }

    pub fn apply(&mut self, command: ViewportCommand) -> Result<(), SessionError> {
        match command {
            ViewportCommand::Pan { dx, dy } => self.pan(dx, dy),
            ViewportCommand::Zoom {
                factor,
                pivot_x,
                pivot_y,
            } => self.zoom(factor, pivot_x, pivot_y),
        }
    }

    pub fn reset_view(&mut self) {
        self.transform = Transform::for_frame(self.size);
        self.dirty = true;
    }

    pub fn set_parameter(&mut self, c: Complex) {
        if c != self.parameter.c() {
            self.parameter.set(c);
            self.dirty = true;
        }
    }

    /// Sets `c` from `"a,b"` text. On a parse error `c` is left as it was.
    pub fn set_parameter_from_str(&mut self, input: &str) -> Result<Complex, ParameterError> {
        let previous = self.parameter.c();
        let c = self.parameter.set_from_preset_str(input)?;

        if c != previous {
            self.dirty = true;
        }

        Ok(c)
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.parameter.toggle_animation()
    }

    /// One animation step; marks the session dirty when `c` moved.
    pub fn tick_animation(&mut self) -> Option<Complex> {
        let c = self.parameter.tick()?;
        self.dirty = true;

        Some(c)
    }

    /// Replaces the render settings. The parameter `c` stays with the
    /// controller; `config.c` is ignored.
    pub fn set_config(&mut self, config: JuliaConfig) -> Result<(), SessionError> {
        config.params()?;

        if config != self.config {
            self.config = config;
            self.dirty = true;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether a render is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn render(&self) -> Result<PixelBuffer, RenderError> {
        let config = JuliaConfig {
            c: self.parameter.c(),
            ..self.config
        };
        let request = config.build_render_request(self.size, self.transform)?;

        render_frame(&request)
    }
}
