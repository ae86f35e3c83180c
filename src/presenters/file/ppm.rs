use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Binary PPM (`P6`) writer. Alpha is dropped; frames are always opaque.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        let size = buffer.size();

        // P6: binary RGB, then width, height and max channel value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", size.width(), size.height())?;
        writeln!(writer, "255")?;
        writer.write_all(&rgba_to_rgb(buffer.buffer()))?;

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        self.encode(buffer, &mut writer)?;
        writer.flush()
    }
}
