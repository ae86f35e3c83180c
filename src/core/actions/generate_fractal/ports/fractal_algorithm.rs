use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;

/// Per-pixel computation over a frame. Each pixel is independent of the others.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn size(&self) -> FrameSize;
}
