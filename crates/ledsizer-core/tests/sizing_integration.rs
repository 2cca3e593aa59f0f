//! Integration tests for resistor sizing.

use ledsizer_core::units::{format_resistance, nearest_e12};
use ledsizer_core::{Circuit, Error, Led, Power, Transistor};

/// Size the classic 5 V RGB indicator board:
///
/// ```text
///        5V supply (1.2 A)
///          +
///          |
///    +-----+-----+
///    |     |     |
///   R_r   R_g   R_b
///    |     |     |
///   red  green  blue
///    |     |     |
///    +-----+-----+
///          |
///       Q1 (100 mA)
///          |
///         GND
/// ```
///
/// Expected: R_red = 18.67 Ω, R_green = R_blue = 10 Ω
#[test]
fn test_rgb_indicator_board() {
    let circuit = Circuit::new(
        Power::new(5.0, 1.2),
        vec![
            Led::new("red", 2.2, 0.150),
            Led::new("green", 3.5, 0.150),
            Led::new("blue", 3.5, 0.150),
        ],
        Transistor::new(0.100),
    );

    let resistors = circuit.calculate_resistors().expect("sizing should succeed");

    assert_eq!(resistors.len(), 3);
    assert!(
        (resistors["red"] - 18.667).abs() < 1e-3,
        "R(red) = {} (expected 18.667)",
        resistors["red"]
    );
    assert!(
        (resistors["green"] - 10.0).abs() < 1e-9,
        "R(green) = {} (expected 10.0)",
        resistors["green"]
    );
    assert!(
        (resistors["blue"] - 10.0).abs() < 1e-9,
        "R(blue) = {} (expected 10.0)",
        resistors["blue"]
    );
}

/// The high-power variant draws 1.1 A through a 100 mA transistor; sizing
/// still succeeds (the formula ignores the driver limit) but the budget
/// check flags the overload.
#[test]
fn test_high_power_board() {
    let circuit = Circuit::new(
        Power::new(5.0, 1.2),
        vec![
            Led::new("red", 2.5, 0.400),
            Led::new("green", 3.4, 0.350),
            Led::new("blue", 3.4, 0.350),
        ],
        Transistor::new(0.100),
    );

    let resistors = circuit.calculate_resistors().expect("sizing should succeed");
    assert!(
        (resistors["red"] - 6.25).abs() < 1e-12,
        "R(red) = {} (expected 6.25)",
        resistors["red"]
    );

    let warnings = circuit.check_current_budget();
    assert_eq!(warnings.len(), 1, "expected the transistor overload warning");
    assert!((warnings[0].drawn - 1.100).abs() < 1e-12);
    assert!((warnings[0].available - 0.100).abs() < 1e-12);
}

/// Sized values flow into purchasable parts and display strings.
#[test]
fn test_sizing_to_part_selection() {
    let circuit = Circuit::new(
        Power::new(5.0, 1.2),
        vec![Led::new("red", 2.2, 0.150)],
        Transistor::new(0.500),
    );

    let resistors = circuit.calculate_resistors().unwrap();
    let exact = resistors["red"];
    let part = nearest_e12(exact);

    assert!(part >= exact, "E12 value must not raise the LED current");
    assert!((part - 22.0).abs() < 1e-9, "part = {} (expected 22.0)", part);
    assert_eq!(format_resistance(part), "22.00 Ω");
}

/// A white LED whose forward voltage equals the supply cannot be sized.
#[test]
fn test_unsizable_white_led() {
    let circuit = Circuit::new(
        Power::new(5.0, 1.2),
        vec![Led::new("white", 5.0, 0.150)],
        Transistor::new(0.100),
    );

    match circuit.calculate_resistors() {
        Err(Error::InvalidVoltage { color, .. }) => assert_eq!(color, "white"),
        other => panic!("expected InvalidVoltage, got {:?}", other),
    }
}
