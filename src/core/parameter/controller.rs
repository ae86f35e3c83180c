use crate::core::data::complex::Complex;
use crate::core::parameter::animation::ParameterAnimation;
use crate::core::parameter::presets::{ParameterError, parse_parameter};

/// Owns the current Julia parameter `c`.
///
/// Renders read `c` by value, so a change only affects frames started after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterController {
    c: Complex,
    animation: Option<ParameterAnimation>,
}

impl ParameterController {
    #[must_use]
    pub fn new(c: Complex) -> Self {
        Self { c, animation: None }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn set(&mut self, c: Complex) {
        self.c = c;
    }

    pub fn set_from_preset_str(&mut self, input: &str) -> Result<Complex, ParameterError> {
        let c = parse_parameter(input)?;
        self.set(c);

        Ok(c)
    }

    /// Human-readable form, e.g. `c = (0.300, 0.500i)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("c = ({:.3}, {:.3}i)", self.c.real, self.c.imag)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts the animation from angle zero, or stops it. Returns whether the
    /// animation is running afterwards.
    pub fn toggle_animation(&mut self) -> bool {
        self.animation = match self.animation {
            Some(_) => None,
            None => Some(ParameterAnimation::new()),
        };

        self.is_animating()
    }

    /// Advances the animation by one step and applies the new `c`.
    /// Does nothing while the animation is stopped.
    pub fn tick(&mut self) -> Option<Complex> {
        let c = self.animation.as_mut()?.advance();
        self.set(c);

        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parameter::animation::ANIMATION_RADIUS;

    #[test]
    fn label_uses_three_decimals() {
        let controller = ParameterController::new(Complex::new(0.3, 0.5));

        assert_eq!(controller.label(), "c = (0.300, 0.500i)");
    }

    #[test]
    fn label_keeps_sign_of_negative_parts() {
        let controller = ParameterController::new(Complex::new(-0.4, -0.61234));

        assert_eq!(controller.label(), "c = (-0.400, -0.612i)");
    }

    #[test]
    fn set_replaces_parameter() {
        let mut controller = ParameterController::new(Complex::new(-0.4, 0.6));
        controller.set(Complex::new(0.285, 0.01));

        assert_eq!(controller.c(), Complex::new(0.285, 0.01));
    }

    #[test]
    fn set_from_preset_str_updates_only_on_success() {
        let mut controller = ParameterController::new(Complex::new(-0.4, 0.6));

        assert_eq!(controller.set_from_preset_str("-0.8,0.156"), Ok(Complex::new(-0.8, 0.156)));
        assert_eq!(controller.c(), Complex::new(-0.8, 0.156));

        assert!(controller.set_from_preset_str("oops").is_err());
        assert_eq!(controller.c(), Complex::new(-0.8, 0.156));
    }

    #[test]
    fn tick_is_noop_while_stopped() {
        let mut controller = ParameterController::new(Complex::new(-0.4, 0.6));

        assert_eq!(controller.tick(), None);
        assert_eq!(controller.c(), Complex::new(-0.4, 0.6));
    }

    #[test]
    fn tick_moves_parameter_onto_animation_circle() {
        let mut controller = ParameterController::new(Complex::new(-0.4, 0.6));

        assert!(controller.toggle_animation());
        let c = controller.tick().unwrap();

        assert_eq!(controller.c(), c);
        assert!((c.magnitude() - ANIMATION_RADIUS).abs() < 1e-12);
    }

    #[test]
    fn restarting_animation_resets_angle() {
        let mut controller = ParameterController::new(Complex::new(-0.4, 0.6));

        controller.toggle_animation();
        let first = controller.tick();
        controller.tick();
        controller.tick();

        assert!(!controller.toggle_animation());
        assert!(controller.toggle_animation());
        assert_eq!(controller.tick(), first);
    }
}
