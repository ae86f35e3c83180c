use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;
use crate::core::fractals::julia::colour_mapping::maps::hsv_escape::JuliaHsvEscape;

#[must_use]
pub fn julia_colour_map_factory(
    kind: JuliaColourMapKinds,
    max_iterations: u32,
) -> Box<dyn JuliaColourMap> {
    match kind {
        JuliaColourMapKinds::HsvOverdrive => {
            Box::new(JuliaHsvEscape::new(max_iterations))
        }
        JuliaColourMapKinds::HsvClamped => {
            Box::new(JuliaHsvEscape::with_clamped_saturation(max_iterations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            JuliaColourMapKinds::ALL.first(),
            Some(&JuliaColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in JuliaColourMapKinds::ALL {
            let map = julia_colour_map_factory(kind, 500);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in JuliaColourMapKinds::ALL {
            let map = julia_colour_map_factory(kind, 500);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = JuliaColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn boxed_map_delegates_to_concrete_map() {
        let map = julia_colour_map_factory(JuliaColourMapKinds::HsvOverdrive, 500);

        assert_eq!(map.map(500.0), JuliaHsvEscape::new(500).map(500.0));
    }
}
