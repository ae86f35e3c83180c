use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::hsv::Hsv;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;

/// Maps smooth escape speed to colour through HSV: hue decays from 360
/// degrees, value falls to black inside the set.
#[derive(Debug)]
pub struct JuliaHsvEscape {
    max_iterations: u32,
    clamp_saturation: bool,
}

impl ColourMap<f64> for JuliaHsvEscape {
    fn map(&self, speed: f64) -> Colour {
        let hsv = Hsv::from_escape(speed, self.max_iterations);

        if self.clamp_saturation {
            hsv.with_clamped_saturation().to_colour()
        } else {
            hsv.to_colour()
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaColourMap for JuliaHsvEscape {
    fn kind(&self) -> JuliaColourMapKinds {
        if self.clamp_saturation {
            JuliaColourMapKinds::HsvClamped
        } else {
            JuliaColourMapKinds::HsvOverdrive
        }
    }
}

impl JuliaHsvEscape {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            clamp_saturation: false,
        }
    }

    #[must_use]
    pub fn with_clamped_saturation(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            clamp_saturation: true,
        }
    }
}
