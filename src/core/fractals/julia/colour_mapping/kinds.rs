/// Colour maps selectable for Julia renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JuliaColourMapKinds {
    /// Saturation `1.1 * t`, allowed to exceed one.
    #[default]
    HsvOverdrive,
    /// Saturation clamped to `[0, 1]`.
    HsvClamped,
}

impl JuliaColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HsvOverdrive, Self::HsvClamped];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HsvOverdrive => "HSV escape",
            Self::HsvClamped => "HSV escape (clamped saturation)",
        }
    }
}

impl std::fmt::Display for JuliaColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
