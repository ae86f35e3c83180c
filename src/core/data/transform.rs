use crate::core::data::complex::Complex;
use crate::core::data::frame_size::{FrameSize, FrameSizeError};
use std::error::Error;
use std::fmt;

/// Half-width of the default visible window, which spans `[-2, 2]` on both axes.
pub const DEFAULT_WINDOW_HALF_EXTENT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformError {
    InvalidFrameSize(FrameSizeError),
    InvalidZoomFactor { factor: f64 },
    InvalidZoomPivot { x: f64, y: f64 },
    InvalidPanDelta { dx: f64, dy: f64 },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrameSize(err) => write!(f, "invalid frame size: {}", err),
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::InvalidZoomPivot { x, y } => {
                write!(f, "zoom pivot must be finite, got ({}, {})", x, y)
            }
            Self::InvalidPanDelta { dx, dy } => {
                write!(f, "pan delta must be finite, got ({}, {})", dx, dy)
            }
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFrameSize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FrameSizeError> for TransformError {
    fn from(err: FrameSizeError) -> Self {
        Self::InvalidFrameSize(err)
    }
}

/// Affine map from pixel space to the complex plane:
/// `real = sx * px + tx`, `imag = sy * py + ty`.
///
/// Values are immutable; [`Transform::pan`] and [`Transform::zoom`] return a
/// new transform rather than editing fields in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
}

impl Transform {
    /// Maps `[0, width] x [0, height]` onto `[-2, 2] x [-2, 2]`, with the
    /// imaginary axis pointing up.
    pub fn init(width: u32, height: u32) -> Result<Self, TransformError> {
        let size = FrameSize::new(width, height)?;

        Ok(Self::for_frame(size))
    }

    #[must_use]
    pub fn for_frame(size: FrameSize) -> Self {
        let extent = 2.0 * DEFAULT_WINDOW_HALF_EXTENT;

        Self {
            sx: extent / f64::from(size.width()),
            sy: -extent / f64::from(size.height()),
            tx: -DEFAULT_WINDOW_HALF_EXTENT,
            ty: DEFAULT_WINDOW_HALF_EXTENT,
        }
    }

    #[must_use]
    pub fn from_pixel(&self, px: f64, py: f64) -> Complex {
        Complex {
            real: self.sx * px + self.tx,
            imag: self.sy * py + self.ty,
        }
    }

    /// Inverse of [`Transform::from_pixel`].
    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> (f64, f64) {
        ((point.real - self.tx) / self.sx, (point.imag - self.ty) / self.sy)
    }

    /// Translates the view by a pixel-space drag delta.
    pub fn pan(&self, dx: f64, dy: f64) -> Result<Self, TransformError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(TransformError::InvalidPanDelta { dx, dy });
        }

        Ok(Self {
            tx: self.tx - self.sx * dx,
            ty: self.ty - self.sy * dy,
            ..*self
        })
    }

    /// Scales the view by `factor` about the plane point under pixel
    /// `(pivot_x, pivot_y)`. `factor > 1` zooms out, `factor < 1` zooms in.
    pub fn zoom(&self, factor: f64, pivot_x: f64, pivot_y: f64) -> Result<Self, TransformError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TransformError::InvalidZoomFactor { factor });
        }

        if !pivot_x.is_finite() || !pivot_y.is_finite() {
            return Err(TransformError::InvalidZoomPivot { x: pivot_x, y: pivot_y });
        }

        let pivot = self.from_pixel(pivot_x, pivot_y);

        Ok(Self {
            sx: factor * self.sx,
            sy: factor * self.sy,
            tx: factor * self.tx + pivot.real - factor * pivot.real,
            ty: factor * self.ty + pivot.imag - factor * pivot.imag,
        })
    }

    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }

    #[must_use]
    pub fn translation(&self) -> (f64, f64) {
        (self.tx, self.ty)
    }
}
