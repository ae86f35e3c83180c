use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the algorithm's frame on the calling thread, in
/// row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let size = algorithm.size();

    (0..size.height())
        .flat_map(|y| (0..size.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;

    #[derive(Debug)]
    struct StubAlgorithm {
        size: FrameSize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (u32, u32);

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.x, pixel.y)
        }

        fn size(&self) -> FrameSize {
            self.size
        }
    }

    #[test]
    fn test_visits_every_pixel_in_row_major_order() {
        let algorithm = StubAlgorithm {
            size: FrameSize::new(3, 2).unwrap(),
        };

        let results = generate_fractal(&algorithm);

        assert_eq!(
            results,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_single_pixel_frame() {
        let algorithm = StubAlgorithm {
            size: FrameSize::new(1, 1).unwrap(),
        };

        assert_eq!(generate_fractal(&algorithm), vec![(0, 0)]);
    }
}
