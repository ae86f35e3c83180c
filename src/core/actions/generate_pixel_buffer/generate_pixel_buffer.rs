use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError, RGBA_CHANNELS};

/// Generates a pixel buffer by mapping row-major input values to colours.
///
/// Fails with [`PixelBufferError::BoundsMismatch`] when `input` does not hold
/// exactly one value per pixel of `size`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    size: FrameSize,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * RGBA_CHANNELS);

    for value in input {
        buffer.extend_from_slice(&mapper.map(value).to_rgba());
    }

    PixelBuffer::from_data(size, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u8> for StubColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
                a: 255,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let size = FrameSize::new(3, 2).unwrap();
        let expected_buffer: PixelBufferData = vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ];

        let results = generate_pixel_buffer(input, &StubColourMap {}, size).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.size(), size);
        assert_eq!(results.buffer_size(), 24);
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let size = FrameSize::new(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &StubColourMap {}, size);

        assert_eq!(
            results,
            Err(PixelBufferError::BoundsMismatch {
                frame_size: 16,
                buffer_size: 24
            })
        );
    }
}
