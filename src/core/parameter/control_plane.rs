use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::transform::Transform;

/// Secondary view used to pick `c`: always shows the fixed `[-2, 2]` window,
/// whatever the main viewport's pan and zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPlane {
    size: FrameSize,
    transform: Transform,
}

impl ControlPlane {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            transform: Transform::for_frame(size),
        }
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn map_to_pixel(&self, c: Complex) -> (f64, f64) {
        self.transform.to_pixel(c)
    }

    #[must_use]
    pub fn map_to_cartesian(&self, x: f64, y: f64) -> Complex {
        self.transform.from_pixel(x, y)
    }

    /// Pixel position of the plane origin, where the axes cross.
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.map_to_pixel(Complex::new(0.0, 0.0))
    }

    /// Where the host draws the `c` label.
    #[must_use]
    pub fn label_anchor(&self, c: Complex) -> (f64, f64) {
        self.map_to_pixel(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane() -> ControlPlane {
        ControlPlane::new(FrameSize::new(200, 100).unwrap())
    }

    #[test]
    fn map_to_pixel_matches_fixed_window() {
        let plane = plane();

        assert_eq!(plane.map_to_pixel(Complex::new(-2.0, 2.0)), (0.0, 0.0));
        assert_eq!(plane.map_to_pixel(Complex::new(2.0, -2.0)), (200.0, 100.0));
        assert_eq!(plane.origin(), (100.0, 50.0));
    }

    #[test]
    fn map_to_cartesian_inverts_map_to_pixel() {
        let plane = plane();
        let c = Complex::new(0.3, 0.5);
        let (x, y) = plane.map_to_pixel(c);
        let back = plane.map_to_cartesian(x, y);

        assert!((back.real - c.real).abs() < 1e-12);
        assert!((back.imag - c.imag).abs() < 1e-12);
    }

    #[test]
    fn clicking_above_origin_gives_positive_imaginary_part() {
        let c = plane().map_to_cartesian(100.0, 25.0);

        assert_eq!(c, Complex::new(0.0, 1.0));
    }

    #[test]
    fn label_anchor_is_the_mapped_parameter() {
        let plane = plane();
        let c = Complex::new(-1.0, -1.0);

        assert_eq!(plane.label_anchor(c), (50.0, 75.0));
    }
}
