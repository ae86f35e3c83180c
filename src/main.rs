use clap::Parser;

use julia_explorer::{CliArgs, CliRenderController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = CliArgs::parse();
    let mut controller = CliRenderController::new(PpmFilePresenter::new());

    controller.generate(&args)?;
    controller.write(&args.output)?;

    Ok(())
}
