mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::cli::args::CliArgs;
pub use crate::controllers::cli::render::CliRenderController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::session::{RenderSession, SessionError};
pub use crate::core::actions::render_frame::{
    RenderError, RenderRequest, RenderStrategy, render, render_frame,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::transform::{Transform, TransformError};
pub use crate::core::fractals::julia::algorithm::escape;
pub use crate::core::fractals::julia::colour_mapping::hsv::to_colour;
pub use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
pub use crate::core::fractals::julia::errors::JuliaError;
pub use crate::core::fractals::julia::julia_config::JuliaConfig;
pub use crate::core::fractals::julia::params::JuliaParams;
pub use crate::core::parameter::{
    ANIMATION_INTERVAL, ControlPlane, JULIA_PRESETS, JuliaPreset, ParameterAnimation,
    ParameterController, ParameterError, parse_parameter,
};
pub use crate::input::viewport_input::{DragState, ViewportCommand, ViewportInput, wheel};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
