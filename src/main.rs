mod app;
mod cli;
mod color;
mod config;
mod event;
mod logging;
mod source;
mod tui;
mod types;
mod ui;

use anyhow::Result;
use clap::Parser;

use config::Config;
use logging::Sink;
use source::MockPaletteSource;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = Config::from_cli(&cli_opts);
    let mut source = MockPaletteSource::new();

    if let Some(command) = cli_opts.command {
        logging::init(Sink::Stderr, config.verbosity)?;
        return cli::run(command, &mut source);
    }

    logging::init(Sink::File(&config.log_path), config.verbosity)?;
    tracing::info!(dark_mode = config.dark_mode, "starting palettr");

    let mut app = app::App::new(Box::new(source), &config);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal, config.tick_rate);

    tui::restore()?;

    result
}
