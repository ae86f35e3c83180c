use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Bytes per pixel: red, green, blue, alpha.
pub const RGBA_CHANNELS: usize = 4;

fn frame_size_to_buffer_size(size: FrameSize) -> usize {
    size.pixel_count() * RGBA_CHANNELS
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        size: FrameSize,
    },
    BoundsMismatch {
        frame_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                frame_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame needs {} bytes but buffer holds {}",
                    frame_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// A complete row-major RGBA frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: FrameSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            buffer: vec![0; frame_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: FrameSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let frame_size = frame_size_to_buffer_size(size);

        if frame_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                frame_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index..index + RGBA_CHANNELS].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok(self.size.offset_of(pixel, RGBA_CHANNELS))
    }
}
