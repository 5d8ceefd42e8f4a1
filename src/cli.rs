/// CLI argument parsing and command handling.
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use crossterm::style::{Color, Stylize};

use crate::color::{self, ColorRecord};
use crate::source::PaletteSource;
use crate::types::Palette;

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

#[derive(Parser, Debug)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based color palette browser"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Start with the dark theme
    #[arg(long, global = true)]
    pub dark: bool,

    /// Resolve requests immediately instead of simulating latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Number of palettes generated for the inspiration gallery
    #[arg(long, default_value_t = 6)]
    pub gallery_size: usize,

    /// UI refresh interval in milliseconds
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Log file used while the TUI is running
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe a hex color in RGB and HSV
    Lookup {
        hex: String,
        #[arg(long)]
        json: bool,
    },
    /// Print one random palette
    Random {
        #[arg(long)]
        json: bool,
    },
    /// Print the top palettes
    Top {
        #[arg(long)]
        json: bool,
    },
    /// Print a batch of generated palettes
    Inspire {
        #[arg(short = 'n', long = "count", default_value_t = 6)]
        count: usize,
        #[arg(long)]
        json: bool,
    },
}

/// Execute a CLI command (lookup, random, top or inspire).
pub fn run(command: Command, source: &mut dyn PaletteSource) -> Result<()> {
    match command {
        Command::Lookup { hex, json } => handle_lookup(&hex, json)?,
        Command::Random { json } => {
            let palette = source.random_palette()?;
            print_palettes(&[palette], json)?;
        }
        Command::Top { json } => print_palettes(&source.top_palettes()?, json)?,
        Command::Inspire { count, json } => print_palettes(&source.inspiration(count)?, json)?,
    }
    Ok(())
}

fn handle_lookup(input: &str, json: bool) -> Result<()> {
    let record = match color::lookup_color(input) {
        Ok(record) => record,
        Err(err) => {
            tracing::info!(input, "rejected color input");
            println!("{err}");
            return Ok(());
        }
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", format_record(&record));
    }
    Ok(())
}

fn print_palettes(palettes: &[Palette], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(palettes)?);
        return Ok(());
    }
    for palette in palettes {
        println!("{}", format_palette(palette));
    }
    Ok(())
}

pub fn format_record(record: &ColorRecord) -> String {
    let rgb = record.rgb;
    let hsv = record.hsv;
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", swatch(record.hex.as_str()), record.label);
    let _ = writeln!(out, "  HEX: #{}", rgb.to_hex());
    let _ = writeln!(out, "  RGB: {}, {}, {}", rgb.red, rgb.green, rgb.blue);
    let _ = writeln!(
        out,
        "  HSV: {}°, {}%, {}%",
        hsv.hue, hsv.saturation, hsv.value
    );
    out
}

pub fn format_palette(palette: &Palette) -> String {
    let swatches = palette
        .colors
        .iter()
        .map(|c| swatch(c))
        .collect::<Vec<_>>()
        .join("");
    format!(
        "{swatches} {}\n  by {} • {} votes\n  {}\n",
        palette.title,
        palette.user_name,
        palette.num_votes,
        palette.hex_list()
    )
}

/// A true-color block for `hex`, or blanks when it does not parse.
fn swatch(hex: &str) -> String {
    match color::validate_hex(hex) {
        Ok(hex) => {
            let rgb = color::hex_to_rgb(&hex);
            "    "
                .on(Color::Rgb {
                    r: rgb.red,
                    g: rgb.green,
                    b: rgb.blue,
                })
                .to_string()
        }
        Err(_) => "    ".to_string(),
    }
}
