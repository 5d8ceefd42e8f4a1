/// Tracing subscriber setup.
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing::Level;

/// Where log lines go. The TUI owns the terminal, so it logs to a file.
pub enum Sink<'a> {
    File(&'a Path),
    Stderr,
}

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(sink: Sink<'_>, verbosity: u8) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(level_for(verbosity));
    match sink {
        Sink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(anyhow::Error::msg)?;
        }
        Sink::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(anyhow::Error::msg)?;
        }
    }
    Ok(())
}
