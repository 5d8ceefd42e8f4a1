/// Runtime settings, folded together from the command line.
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::types::PaletteQuery;

/// Simulated response times for each kind of request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    pub random: Duration,
    pub top: Duration,
    pub inspiration: Duration,
    pub lookup: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            random: Duration::ZERO,
            top: Duration::ZERO,
            inspiration: Duration::ZERO,
            lookup: Duration::ZERO,
        }
    }

    pub fn for_query(&self, query: PaletteQuery) -> Duration {
        match query {
            PaletteQuery::Random => self.random,
            PaletteQuery::Top => self.top,
            PaletteQuery::Inspiration => self.inspiration,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            random: Duration::from_millis(500),
            top: Duration::from_millis(300),
            inspiration: Duration::from_millis(300),
            lookup: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub dark_mode: bool,
    pub tick_rate: Duration,
    pub latency: Latency,
    pub gallery_size: usize,
    pub gallery_stagger: Duration,
    pub log_path: PathBuf,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            tick_rate: Duration::from_millis(100),
            latency: Latency::default(),
            gallery_size: 6,
            gallery_stagger: Duration::from_millis(200),
            log_path: default_log_path(),
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            dark_mode: cli.dark,
            tick_rate: Duration::from_millis(cli.tick_ms.max(1)),
            latency: if cli.no_delay {
                Latency::none()
            } else {
                defaults.latency
            },
            gallery_size: cli.gallery_size,
            gallery_stagger: if cli.no_delay {
                Duration::ZERO
            } else {
                defaults.gallery_stagger
            },
            log_path: cli.log_file.clone().unwrap_or(defaults.log_path),
            verbosity: cli.verbose,
        }
    }
}

/// Returns the default log file path inside the user's data directory.
/// Falls back to `./palettr.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let palettr_dir = data_dir.join("palettr");
        std::fs::create_dir_all(&palettr_dir).ok();
        palettr_dir.join("palettr.log")
    } else {
        PathBuf::from("palettr.log")
    }
}
