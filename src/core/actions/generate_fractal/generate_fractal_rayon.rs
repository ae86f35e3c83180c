use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed independently and concatenated in order, so the output
/// matches [`generate_fractal`](super::generate_fractal::generate_fractal)
/// element for element.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let size = algorithm.size();
    let row_width = size.width() as usize;

    let rows: Vec<Vec<Alg::Success>> = (0..size.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..size.width() {
                row.push(algorithm.compute(Point { x, y }));
            }

            row
        })
        .collect();

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::frame_size::FrameSize;

    #[derive(Debug)]
    struct StubAlgorithm {
        size: FrameSize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn compute(&self, pixel: Point) -> Self::Success {
            u64::from(pixel.x) * 1_000 + u64::from(pixel.y)
        }

        fn size(&self) -> FrameSize {
            self.size
        }
    }

    fn stub(width: u32, height: u32) -> StubAlgorithm {
        StubAlgorithm {
            size: FrameSize::new(width, height).unwrap(),
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = stub(10, 8);

        assert_eq!(generate_fractal_rayon(&algorithm), generate_fractal(&algorithm));
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = stub(1, 1);

        assert_eq!(generate_fractal_rayon(&algorithm), vec![0]);
    }

    #[test]
    fn test_rayon_with_large_rect() {
        let algorithm = stub(101, 99);
        let results = generate_fractal_rayon(&algorithm);

        assert_eq!(results.len(), 101 * 99);
        assert_eq!(results, generate_fractal(&algorithm));
    }
}
