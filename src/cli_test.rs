use super::*;
use crate::config::{Config, Latency};
use crate::source::MockPaletteSource;

#[test]
fn no_subcommand_starts_the_tui_with_defaults() {
    let cli = Cli::try_parse_from(["palettr"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.dark);
    assert_eq!(cli.gallery_size, 6);
    assert_eq!(cli.tick_ms, 100);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn lookup_takes_a_hex_argument() {
    let cli = Cli::try_parse_from(["palettr", "lookup", "#3366CC", "--json"]).unwrap();
    match cli.command {
        Some(Command::Lookup { hex, json }) => {
            assert_eq!(hex, "#3366CC");
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn inspire_count_and_global_flags() {
    let cli = Cli::try_parse_from(["palettr", "inspire", "-n", "3", "-vv", "--no-delay"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Command::Inspire {
            count: 3,
            json: false
        })
    ));
    assert_eq!(cli.verbose, 2);
    assert!(cli.no_delay);
}

#[test]
fn lookup_requires_hex() {
    assert!(Cli::try_parse_from(["palettr", "lookup"]).is_err());
}

#[test]
fn config_follows_flags() {
    let cli = Cli::try_parse_from([
        "palettr",
        "--dark",
        "--no-delay",
        "--gallery-size",
        "9",
        "--tick-ms",
        "0",
        "--log-file",
        "/tmp/palettr-test.log",
    ])
    .unwrap();
    let config = Config::from_cli(&cli);
    assert!(config.dark_mode);
    assert_eq!(config.latency, Latency::none());
    assert_eq!(config.gallery_size, 9);
    assert_eq!(config.tick_rate.as_millis(), 1);
    assert_eq!(config.log_path, PathBuf::from("/tmp/palettr-test.log"));
}

#[test]
fn format_record_lists_every_model() {
    let record = color::lookup_color("00FF00").unwrap();
    let text = format_record(&record);
    assert!(text.contains("Color #00FF00"));
    assert!(text.contains("HEX: #00FF00"));
    assert!(text.contains("RGB: 0, 255, 0"));
    assert!(text.contains("HSV: 120°, 100%, 100%"));
}

#[test]
fn format_record_hex_line_is_uppercase_without_prefix() {
    let record = color::lookup_color("#3366cc").unwrap();
    let text = format_record(&record);
    assert!(text.contains("Color #3366CC"));
    assert!(text.contains("HEX: #3366CC\n"));
    assert!(!text.contains("##"));
}

#[test]
fn format_palette_shows_title_author_and_hex_codes() {
    let mut source = MockPaletteSource::new();
    let top = source.top_palettes().unwrap();
    let text = format_palette(&top[2]);
    assert!(text.contains("Forest Path"));
    assert!(text.contains("by Designer3 • 875 votes"));
    assert!(text.contains("#2D5016, #61892F, #86C232, #C6E174, #F0F3BD"));
}

#[test]
fn commands_run_against_the_mock_source() {
    let mut source = MockPaletteSource::new();
    run(
        Command::Lookup {
            hex: "nothex".to_string(),
            json: false,
        },
        &mut source,
    )
    .unwrap();
    run(Command::Top { json: true }, &mut source).unwrap();
    run(
        Command::Inspire {
            count: 2,
            json: false,
        },
        &mut source,
    )
    .unwrap();
}
