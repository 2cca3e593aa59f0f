//! End-to-end tests: parse a board file, size the resistors, verify values.

use ledsizer_parser::parse;

/// Parse and size the classic 5 V RGB indicator board.
#[test]
fn test_parse_size_rgb_board() {
    let board_str = r#"
RGB Indicator Board
* three-channel indicator on the 5V rail
POWER 5 1.2
LED red 2.2 150m
LED green 3.5 150m
LED blue 3.5 150m
TRANSISTOR 100m
.end
"#;

    let board = parse(board_str).expect("parse should succeed");
    assert_eq!(board.title.as_deref(), Some("RGB Indicator Board"));
    assert_eq!(board.circuit.led_count(), 3);

    let resistors = board
        .circuit
        .calculate_resistors()
        .expect("sizing should succeed");

    let r_red = resistors["red"];
    let r_green = resistors["green"];
    assert!(
        (r_red - 18.667).abs() < 1e-3,
        "R(red) = {} (expected 18.667)",
        r_red
    );
    assert!(
        (r_green - 10.0).abs() < 1e-9,
        "R(green) = {} (expected 10.0)",
        r_green
    );
}

/// SI suffixes in the board file land in the computation unscaled-correct:
/// a 20 mA LED on a 12 V rail needs (12 - 2) / 0.02 = 500 Ω.
#[test]
fn test_parse_size_with_suffixes() {
    let board_str = "POWER 12\nLED amber 2 20m\nTRANSISTOR 1\n";

    let board = parse(board_str).expect("parse should succeed");
    let resistors = board.circuit.calculate_resistors().unwrap();

    let r = resistors["amber"];
    assert!((r - 500.0).abs() < 1e-9, "R(amber) = {} (expected 500.0)", r);
}

/// Non-finite spellings that `f64::parse` accepts cannot reach the
/// computation: an `inf` or `nan` field is rejected at the text boundary.
#[test]
fn test_non_finite_values_rejected_at_parse() {
    for board_str in [
        "POWER inf\nLED red 2.2 150m\nTRANSISTOR 100m\n",
        "POWER nan\nLED red 2.2 150m\nTRANSISTOR 100m\n",
        "POWER 5\nLED red -inf 150m\nTRANSISTOR 100m\n",
    ] {
        let err = parse(board_str).expect_err("non-finite value should not parse");
        assert!(
            matches!(err, ledsizer_parser::Error::InvalidValue(_)),
            "unexpected error for {:?}: {:?}",
            board_str,
            err
        );
    }
}

/// A board whose LED cannot be driven surfaces the core validation error.
#[test]
fn test_parse_size_invalid_board() {
    let board_str = "POWER 5\nLED white 5 150m\nTRANSISTOR 100m\n";

    let board = parse(board_str).expect("parse should succeed");
    let err = board.circuit.calculate_resistors().unwrap_err();
    assert!(matches!(err, ledsizer_core::Error::InvalidVoltage { .. }));
}
