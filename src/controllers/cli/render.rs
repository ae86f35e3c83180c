use std::error::Error;
use std::path::Path;

use log::info;

use crate::controllers::cli::args::CliArgs;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::RenderSession;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders one frame from command-line settings and hands it to a file
/// presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, args: &CliArgs) -> Result<(), Box<dyn Error>> {
        let config = args.config();
        let mut session = RenderSession::new(args.width, args.height, config)?;

        if let Some(factor) = args.zoom {
            let size = session.size();
            session.zoom(
                factor,
                f64::from(size.width()) / 2.0,
                f64::from(size.height()) / 2.0,
            )?;
        }
        if let Some((dx, dy)) = args.pan {
            session.pan(dx, dy)?;
        }

        info!(
            "rendering {}x{} julia set, {}, {} iterations max, {}",
            args.width,
            args.height,
            session.parameter().label(),
            config.max_iterations,
            config.strategy.display_name()
        );

        self.buffer = Some(session.render()?);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated frame; does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.as_ref().parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            self.presenter.present(buffer, &filepath)?;
            info!("wrote {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer_size()));

            Ok(())
        }
    }

    fn args(extra: &[&str]) -> CliArgs {
        let base = ["julia_explorer", "--width", "8", "--height", "4", "--max-iterations", "32"];

        CliArgs::try_parse_from(base.iter().chain(extra.iter())).unwrap()
    }

    #[test]
    fn write_before_generate_does_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);

        controller.write("frame.ppm").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn generate_then_write_presents_full_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);

        controller.generate(&args(&["--zoom", "0.5", "--pan", "1,1"])).unwrap();
        controller.write("frame.ppm").unwrap();

        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("frame.ppm"), 8 * 4 * 4)]
        );
    }

    #[test]
    fn generate_rejects_invalid_zoom() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);

        assert!(controller.generate(&args(&["--zoom", "0"])).is_err());
        assert!(controller.buffer().is_none());
    }

    #[test]
    fn generate_rejects_zero_width() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);
        let args = CliArgs::try_parse_from(["julia_explorer", "--width", "0"]).unwrap();

        assert!(controller.generate(&args).is_err());
    }
}
