use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;

pub trait JuliaColourMap: ColourMap<f64> + Send + Sync {
    fn kind(&self) -> JuliaColourMapKinds;
}

impl ColourMap<f64> for Box<dyn JuliaColourMap> {
    fn map(&self, value: f64) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
