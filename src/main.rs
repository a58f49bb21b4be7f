use anyhow::{Context, Result};
use clap::Parser;
use shapekit::app::{handle_fatal_error, init_logging, AppConfig};
use shapekit::cli::{execute_command, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::new(cli.verbose).with_config_path(cli.config);

    init_logging(&config);

    if let Err(e) = run(cli.command, &config) {
        handle_fatal_error(e, config.verbose);
    }
}

fn run(command: Commands, config: &AppConfig) -> Result<()> {
    let settings = config.load_settings().context("Failed to load settings")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(command, &settings, &mut out)
}
