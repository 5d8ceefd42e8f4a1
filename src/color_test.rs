use super::*;

fn hsv(hue: u16, saturation: u8, value: u8) -> HsvColor {
    HsvColor {
        hue,
        saturation,
        value,
    }
}

fn rgb(red: u8, green: u8, blue: u8) -> RgbColor {
    RgbColor { red, green, blue }
}

#[test]
fn validate_hex_accepts_prefix_and_mixed_case() {
    assert_eq!(validate_hex("#ff5733").unwrap().as_str(), "FF5733");
    assert_eq!(validate_hex("aBcDeF").unwrap().as_str(), "ABCDEF");
    assert_eq!(validate_hex("012345").unwrap().to_string(), "012345");
}

#[test]
fn validate_hex_rejects_malformed_input() {
    for input in [
        "", "#", "      ", "#ZZZZZZ", "12345", "1234567", " FF0000", "FF0000 ", "##FF0000",
        "FF00-0", "#FFF", "ÄBCDEF",
    ] {
        assert_eq!(
            validate_hex(input),
            Err(ColorError::InvalidHexFormat),
            "input {input:?}"
        );
    }
}

#[test]
fn validate_hex_only_strips_a_leading_hash() {
    assert!(validate_hex("FF00#00").is_err());
    assert!(validate_hex("FF0000#").is_err());
}

#[test]
fn validate_hex_is_idempotent() {
    for input in ["#a1b2c3", "A1B2C3", "#000000", "ffffff"] {
        let once = validate_hex(input).unwrap();
        let twice = validate_hex(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn hex_color_parses_through_from_str() {
    let hex: HexColor = "#0a0b0c".parse().unwrap();
    assert_eq!(hex.as_str(), "0A0B0C");
    assert!("nope".parse::<HexColor>().is_err());
}

#[test]
fn hex_to_rgb_round_trips_through_to_hex() {
    for value in (0..=0xFF_FFFF_u32).step_by(0x01_0203) {
        let hex = validate_hex(&format!("{value:06x}")).unwrap();
        assert_eq!(hex_to_rgb(&hex).to_hex(), hex);
    }
    let white = validate_hex("FFFFFF").unwrap();
    assert_eq!(hex_to_rgb(&white).to_hex(), white);
}

#[test]
fn rgb_to_hsv_boundaries() {
    assert_eq!(rgb_to_hsv(rgb(0, 0, 0)), hsv(0, 0, 0));
    assert_eq!(rgb_to_hsv(rgb(255, 255, 255)), hsv(0, 0, 100));
    assert_eq!(rgb_to_hsv(rgb(128, 128, 128)), hsv(0, 0, 50));
}

#[test]
fn rgb_to_hsv_primaries_and_secondaries() {
    assert_eq!(rgb_to_hsv(rgb(255, 0, 0)), hsv(0, 100, 100));
    assert_eq!(rgb_to_hsv(rgb(0, 255, 0)), hsv(120, 100, 100));
    assert_eq!(rgb_to_hsv(rgb(0, 0, 255)), hsv(240, 100, 100));
    assert_eq!(rgb_to_hsv(rgb(255, 0, 128)), hsv(330, 100, 100));
}

#[test]
fn rgb_to_hsv_ties_prefer_red_then_green() {
    assert_eq!(rgb_to_hsv(rgb(255, 255, 0)), hsv(60, 100, 100));
    assert_eq!(rgb_to_hsv(rgb(0, 255, 255)), hsv(180, 100, 100));
    assert_eq!(rgb_to_hsv(rgb(255, 0, 255)), hsv(300, 100, 100));
}

#[test]
fn rgb_to_hsv_small_negative_hue_rounds_to_zero() {
    // (10 - 11) / 120 * 60 is -0.5, which must not wrap to 359.
    assert_eq!(rgb_to_hsv(rgb(130, 10, 11)), hsv(0, 92, 51));
}

#[test]
fn rgb_to_hsv_hue_stays_below_360() {
    for red in (0..=255_u8).step_by(5) {
        for green in (0..=255_u8).step_by(15) {
            for blue in (0..=255_u8).step_by(17) {
                let out = rgb_to_hsv(rgb(red, green, blue));
                assert!(out.hue < 360);
                assert!(out.saturation <= 100);
                assert!(out.value <= 100);
            }
        }
    }
}

#[test]
fn lookup_color_builds_full_record() {
    let record = lookup_color("#3366cc").unwrap();
    assert_eq!(record.hex.as_str(), "3366CC");
    assert_eq!(record.rgb, rgb(51, 102, 204));
    assert_eq!(record.hsv, hsv(220, 75, 80));
    assert_eq!(record.label, "Color #3366CC");

    let record = lookup_color("4ECDC4").unwrap();
    assert_eq!(record.rgb, rgb(78, 205, 196));
    assert_eq!(record.hsv, hsv(176, 62, 80));
}

#[test]
fn lookup_color_surfaces_validation_message() {
    let err = lookup_color("12345").unwrap_err();
    assert_eq!(err, ColorError::InvalidHexFormat);
    assert_eq!(err.to_string(), "Please enter a valid 6-digit hex code");
}

#[test]
fn color_record_serializes_with_plain_hex() {
    let record = lookup_color("FF0000").unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["hex"], "FF0000");
    assert_eq!(json["rgb"]["red"], 255);
    assert_eq!(json["hsv"]["saturation"], 100);
    assert_eq!(json["label"], "Color #FF0000");
}
