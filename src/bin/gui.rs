use julia_explorer::{JuliaConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), JuliaConfig::default());

    command.execute()
}
