use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    InvalidPreset { input: String },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPreset { input } => {
                write!(f, "expected two comma-separated numbers \"a,b\", got {:?}", input)
            }
        }
    }
}

impl Error for ParameterError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaPreset {
    pub name: &'static str,
    pub c: Complex,
}

pub const JULIA_PRESETS: &[JuliaPreset] = &[
    JuliaPreset { name: "Default", c: Complex::new(-0.4, 0.6) },
    JuliaPreset { name: "Dendrite", c: Complex::new(0.0, 1.0) },
    JuliaPreset { name: "Douady rabbit", c: Complex::new(-0.123, 0.745) },
    JuliaPreset { name: "San Marco", c: Complex::new(-0.75, 0.0) },
    JuliaPreset { name: "Siegel disk", c: Complex::new(-0.391, -0.587) },
    JuliaPreset { name: "Spirals", c: Complex::new(0.285, 0.01) },
    JuliaPreset { name: "Lightning", c: Complex::new(-0.8, 0.156) },
    JuliaPreset { name: "Dragon", c: Complex::new(-0.835, -0.2321) },
    JuliaPreset { name: "Galaxies", c: Complex::new(-0.7269, 0.1889) },
];

/// Parses `"a,b"` into `a + bi`. Surrounding whitespace is ignored.
pub fn parse_parameter(input: &str) -> Result<Complex, ParameterError> {
    let invalid = || ParameterError::InvalidPreset {
        input: input.to_string(),
    };

    let (real, imag) = input.split_once(',').ok_or_else(invalid)?;
    let real: f64 = real.trim().parse().map_err(|_| invalid())?;
    let imag: f64 = imag.trim().parse().map_err(|_| invalid())?;

    if !real.is_finite() || !imag.is_finite() {
        return Err(invalid());
    }

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_pair() {
        assert_eq!(parse_parameter("0.3,0.5"), Ok(Complex::new(0.3, 0.5)));
        assert_eq!(parse_parameter(" -0.8 , 0.156 "), Ok(Complex::new(-0.8, 0.156)));
        assert_eq!(parse_parameter("1e-1,-2"), Ok(Complex::new(0.1, -2.0)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "0.3", "0.3;0.5", "a,b", "0.3,0.5,0.7", "NaN,0", "inf,1"] {
            assert_eq!(
                parse_parameter(input),
                Err(ParameterError::InvalidPreset {
                    input: input.to_string()
                }),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn presets_are_finite_and_uniquely_named() {
        for (i, preset) in JULIA_PRESETS.iter().enumerate() {
            assert!(preset.c.is_finite());

            for other in &JULIA_PRESETS[i + 1..] {
                assert_ne!(preset.name, other.name);
            }
        }
    }

    #[test]
    fn first_preset_is_the_default_parameter() {
        assert_eq!(JULIA_PRESETS[0].c, Complex::new(-0.4, 0.6));
    }
}
