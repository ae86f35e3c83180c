use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for FrameSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for FrameSizeError {}

/// Dimensions of a render target, anchored at pixel (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte offset of `point` in a row-major buffer with `channels` bytes per pixel.
    #[must_use]
    pub fn offset_of(&self, point: Point, channels: usize) -> usize {
        (point.y as usize * self.width as usize + point.x as usize) * channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_new_valid() {
        let size = FrameSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
    }

    #[test]
    fn test_single_pixel_frame_is_valid() {
        assert!(FrameSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_frame_size_dimensions_must_be_positive() {
        assert_eq!(
            FrameSize::new(0, 10),
            Err(FrameSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            FrameSize::new(10, 0),
            Err(FrameSizeError::InvalidSize { width: 10, height: 0 })
        );
        assert_eq!(
            FrameSize::new(0, 0),
            Err(FrameSizeError::InvalidSize { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_frame_size_contains_point() {
        let size = FrameSize::new(100, 50).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 99, y: 49 }));
        assert!(!size.contains_point(Point { x: 100, y: 0 }));
        assert!(!size.contains_point(Point { x: 0, y: 50 }));
    }

    #[test]
    fn test_offset_of_is_row_major() {
        let size = FrameSize::new(4, 3).unwrap();

        assert_eq!(size.offset_of(Point { x: 0, y: 0 }, 4), 0);
        assert_eq!(size.offset_of(Point { x: 3, y: 0 }, 4), 12);
        assert_eq!(size.offset_of(Point { x: 1, y: 2 }, 4), 36);
        assert_eq!(size.offset_of(Point { x: 1, y: 2 }, 3), 27);
    }
}
