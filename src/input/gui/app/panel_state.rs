use std::time::Duration;

use crate::controllers::session::RenderSession;
use crate::core::parameter::presets::JULIA_PRESETS;

/// Widget state of the control panel that does not belong in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub parameter_input: String,
    pub parameter_error: Option<String>,
    pub render_error: Option<String>,
    pub last_render: Option<Duration>,
}

impl Default for PanelState {
    fn default() -> Self {
        let default_preset = JULIA_PRESETS[0].c;

        Self {
            parameter_input: format!("{},{}", default_preset.real, default_preset.imag),
            parameter_error: None,
            render_error: None,
            last_render: None,
        }
    }
}

impl PanelState {
    /// Parses the text field and applies it to the session. A bad entry is
    /// reported and leaves `c` unchanged.
    pub fn apply_parameter_input(&mut self, session: &mut RenderSession) {
        match session.set_parameter_from_str(&self.parameter_input) {
            Ok(_) => self.parameter_error = None,
            Err(err) => self.parameter_error = Some(err.to_string()),
        }
    }

    pub fn record_render(&mut self, duration: Duration) {
        self.last_render = Some(duration);
        self.render_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::julia::julia_config::JuliaConfig;

    #[test]
    fn default_input_is_default_preset() {
        assert_eq!(PanelState::default().parameter_input, "-0.4,0.6");
    }

    #[test]
    fn valid_input_sets_parameter() {
        let mut session = RenderSession::new(4, 4, JuliaConfig::default()).unwrap();
        let mut panel = PanelState {
            parameter_input: " 0.285 , 0.01 ".to_string(),
            parameter_error: Some("stale".to_string()),
            ..PanelState::default()
        };

        panel.apply_parameter_input(&mut session);

        assert_eq!(session.parameter().c(), Complex::new(0.285, 0.01));
        assert_eq!(panel.parameter_error, None);
    }

    #[test]
    fn invalid_input_keeps_parameter() {
        let mut session = RenderSession::new(4, 4, JuliaConfig::default()).unwrap();
        let mut panel = PanelState {
            parameter_input: "abc".to_string(),
            ..PanelState::default()
        };

        panel.apply_parameter_input(&mut session);

        assert_eq!(session.parameter().c(), Complex::new(-0.4, 0.6));
        assert!(panel.parameter_error.is_some());
    }
}
