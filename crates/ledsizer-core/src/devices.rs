//! Device records: supply, LED, and driving transistor.

use std::fmt;

/// A fixed-voltage power supply.
#[derive(Debug, Clone, PartialEq)]
pub struct Power {
    /// Supply voltage in volts.
    pub volts: f64,
    /// Available supply current in amps. Not read by the sizing formula;
    /// `0.0` means the rating is unspecified and the current budget check
    /// skips the supply-side comparison.
    pub amps: f64,
}

impl Power {
    /// Create a new supply.
    pub fn new(volts: f64, amps: f64) -> Self {
        Self { volts, amps }
    }
}

/// A light-emitting diode, identified by its color label.
#[derive(Debug, Clone, PartialEq)]
pub struct Led {
    /// Color label (e.g. "red"). Result entries are keyed by this.
    pub color: String,
    /// Forward voltage drop at rated current, in volts.
    pub fwd_voltage: f64,
    /// Maximum rated continuous current, in amps.
    pub max_current: f64,
}

impl Led {
    /// Create a new LED.
    pub fn new(color: impl Into<String>, fwd_voltage: f64, max_current: f64) -> Self {
        Self {
            color: color.into(),
            fwd_voltage,
            max_current,
        }
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} V, {} A",
            self.color, self.fwd_voltage, self.max_current
        )
    }
}

/// The transistor driving the LED bank.
#[derive(Debug, Clone, PartialEq)]
pub struct Transistor {
    /// Maximum collector current rating, in amps.
    pub max_current: f64,
    /// Current gain (h_FE) from the datasheet, if known. Reserved for
    /// gain-aware base-resistor sizing; not read by the resistor formula.
    pub gain: Option<f64>,
}

impl Transistor {
    /// Create a transistor with only a current rating.
    pub fn new(max_current: f64) -> Self {
        Self {
            max_current,
            gain: None,
        }
    }

    /// Create a transistor with a current rating and datasheet gain.
    pub fn with_gain(max_current: f64, gain: f64) -> Self {
        Self {
            max_current,
            gain: Some(gain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_display() {
        let led = Led::new("red", 2.2, 0.15);
        assert_eq!(led.to_string(), "red, 2.2 V, 0.15 A");
    }

    #[test]
    fn test_transistor_gain_optional() {
        let t = Transistor::new(0.1);
        assert_eq!(t.gain, None);

        let t = Transistor::with_gain(0.1, 200.0);
        assert_eq!(t.gain, Some(200.0));
    }
}
