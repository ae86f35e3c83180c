use std::path::PathBuf;

use clap::Parser;

use crate::core::actions::render_frame::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::julia_config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_RADIUS, JuliaConfig,
};
use crate::core::parameter::presets::{ParameterError, parse_parameter};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT: &str = "output/julia.ppm";

#[derive(Debug, Parser)]
#[command(name = "julia_explorer")]
#[command(about = "Render a Julia set to a binary PPM image")]
pub struct CliArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Parameter c as "a,b", meaning a + bi
    #[arg(long, value_parser = parse_parameter, allow_hyphen_values = true)]
    pub c: Option<Complex>,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Escape radius, must be greater than 1
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Scale factor about the frame centre; below 1 zooms in
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Pixel offset "dx,dy" applied after the zoom
    #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
    pub pan: Option<(f64, f64)>,

    #[arg(long)]
    pub clamp_saturation: bool,

    /// Compute rows on rayon's thread pool
    #[arg(long)]
    pub parallel: bool,

    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

fn parse_pan(input: &str) -> Result<(f64, f64), ParameterError> {
    let delta = parse_parameter(input)?;

    Ok((delta.real, delta.imag))
}

impl CliArgs {
    #[must_use]
    pub fn config(&self) -> JuliaConfig {
        let defaults = JuliaConfig::default();

        JuliaConfig {
            c: self.c.unwrap_or(defaults.c),
            radius: self.radius,
            max_iterations: self.max_iterations,
            colour_map_kind: if self.clamp_saturation {
                JuliaColourMapKinds::HsvClamped
            } else {
                JuliaColourMapKinds::HsvOverdrive
            },
            strategy: if self.parallel {
                RenderStrategy::Rayon
            } else {
                RenderStrategy::Serial
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("julia_explorer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_julia_config() {
        let args = parse(&[]);

        assert_eq!(args.width, 800);
        assert_eq!(args.height, 600);
        assert_eq!(args.config(), JuliaConfig::default());
        assert_eq!(args.output, PathBuf::from("output/julia.ppm"));
    }

    #[test]
    fn parses_parameter_and_flags() {
        let args = parse(&[
            "--c",
            "-0.8,0.156",
            "--max-iterations",
            "200",
            "--pan",
            "-10,5",
            "--zoom",
            "0.5",
            "--clamp-saturation",
            "--parallel",
        ]);
        let config = args.config();

        assert_eq!(config.c, Complex::new(-0.8, 0.156));
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.colour_map_kind, JuliaColourMapKinds::HsvClamped);
        assert_eq!(config.strategy, RenderStrategy::Rayon);
        assert_eq!(args.pan, Some((-10.0, 5.0)));
        assert_eq!(args.zoom, Some(0.5));
    }

    #[test]
    fn rejects_malformed_parameter() {
        let result = CliArgs::try_parse_from(["julia_explorer", "--c", "0.3"]);

        assert!(result.is_err());
    }
}
