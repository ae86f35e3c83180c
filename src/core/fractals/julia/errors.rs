use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JuliaError {
    ZeroMaxIterationsError,
    InvalidRadius { radius: f64 },
}

impl fmt::Display for JuliaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "Escape radius must be finite and greater than one, got {}", radius)
            }
        }
    }
}

impl Error for JuliaError {}
