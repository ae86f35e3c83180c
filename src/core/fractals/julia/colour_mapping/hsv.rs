use crate::core::data::colour::Colour;

/// Overdrive applied to the normalised escape speed when deriving saturation.
pub const SATURATION_GAIN: f64 = 1.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsv {
    /// Degrees.
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// HSV coordinates for an escape speed in `[0, max_iterations]`.
    ///
    /// Saturation is `1.1 * t` and may exceed one near the set interior.
    #[must_use]
    pub fn from_escape(speed: f64, max_iterations: u32) -> Self {
        let t = speed / f64::from(max_iterations);

        Self {
            hue: 360.0 * (-t).exp(),
            saturation: t * SATURATION_GAIN,
            value: 1.0 - t,
        }
    }

    #[must_use]
    pub fn with_clamped_saturation(self) -> Self {
        Self {
            saturation: self.saturation.clamp(0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> [f64; 3] {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }

    #[must_use]
    pub fn to_colour(self) -> Colour {
        let [r, g, b] = self.to_rgb();

        Colour::opaque(channel_to_byte(r), channel_to_byte(g), channel_to_byte(b))
    }
}

/// Piecewise-linear HSV to RGB with channels in `[0, 1]` for `s, v` in `[0, 1]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    let channel = |n: f64| {
        let k = (n + hue / 60.0).rem_euclid(6.0);
        value - value * saturation * k.min(4.0 - k).min(1.0).max(0.0)
    };

    [channel(5.0), channel(3.0), channel(1.0)]
}

/// Scales a unit channel to a byte, rounding half to even and saturating at
/// both ends.
#[must_use]
pub fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

#[must_use]
pub fn to_colour(speed: f64, max_iterations: u32) -> Colour {
    Hsv::from_escape(speed, max_iterations).to_colour()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_point_is_black() {
        let hsv = Hsv::from_escape(500.0, 500);

        assert_eq!(hsv.value, 0.0);
        assert_eq!(to_colour(500.0, 500), Colour { r: 0, g: 0, b: 0, a: 255 });
    }

    #[test]
    fn immediate_escape_is_white() {
        let hsv = Hsv::from_escape(0.0, 500);

        assert_eq!(hsv, Hsv { hue: 360.0, saturation: 0.0, value: 1.0 });
        assert_eq!(to_colour(0.0, 500), Colour { r: 255, g: 255, b: 255, a: 255 });
    }

    #[test]
    fn intermediate_speed_matches_reference_colour() {
        assert_eq!(to_colour(100.0, 500), Colour::opaque(200, 159, 204));
    }

    #[test]
    fn saturation_overdrive_is_kept_unless_clamped() {
        let hsv = Hsv::from_escape(476.0, 500);

        assert!(hsv.saturation > 1.0);
        assert_eq!(hsv.to_colour(), Colour::opaque(0, 12, 3));
        assert_eq!(hsv.with_clamped_saturation().to_colour(), Colour::opaque(0, 12, 4));
    }

    #[test]
    fn hsv_to_rgb_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn hsv_to_rgb_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.5), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn channel_to_byte_rounds_and_saturates() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(-0.2), 0);
        assert_eq!(channel_to_byte(1.3), 255);
        assert_eq!(channel_to_byte(0.5), 128); // 127.5 ties to even
        assert_eq!(channel_to_byte(f64::NAN), 0);
    }
}
