//! Circuit composition and the resistor sizing computation.

use std::fmt;

use indexmap::IndexMap;

use crate::devices::{Led, Power, Transistor};
use crate::error::{Error, Result};

/// An LED indicator circuit: one supply, a bank of LEDs (each with its own
/// series resistor), and one driving transistor switching the bank.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// The power supply.
    pub power: Power,
    /// LEDs in board order.
    pub leds: Vec<Led>,
    /// The driving transistor.
    pub transistor: Transistor,
}

impl Circuit {
    /// Create a new circuit.
    pub fn new(power: Power, leds: Vec<Led>, transistor: Transistor) -> Self {
        Self {
            power,
            leds,
            transistor,
        }
    }

    /// Number of LEDs in the circuit.
    pub fn led_count(&self) -> usize {
        self.leds.len()
    }

    /// Size the series resistor for each LED so that it conducts exactly its
    /// rated current from this circuit's supply:
    ///
    /// ```text
    /// R = (V_supply - V_forward) / I_max
    /// ```
    ///
    /// Returns a map from color label to resistance in ohms, in board order.
    /// Every returned value is finite and positive; NaN or infinite device
    /// parameters are rejected as validation errors rather than propagated
    /// into the result. If two LEDs share a color label, the later one wins:
    /// the result is keyed by color, not by LED identity. The transistor's own current
    /// limit does not enter the formula; see [`check_current_budget`] for
    /// the advisory comparison.
    ///
    /// [`check_current_budget`]: Circuit::check_current_budget
    pub fn calculate_resistors(&self) -> Result<IndexMap<String, f64>> {
        if !valid_rating(self.transistor.max_current) {
            return Err(Error::InvalidRating {
                name: "transistor".into(),
                value: self.transistor.max_current,
            });
        }

        let mut resistors = IndexMap::with_capacity(self.leds.len());
        for led in &self.leds {
            if !valid_rating(led.max_current) {
                return Err(Error::InvalidRating {
                    name: format!("{} LED", led.color),
                    value: led.max_current,
                });
            }
            // The voltage headroom must be positive and finite; a NaN or
            // infinite supply/forward voltage can never be sized, and a
            // guard written as `fwd_voltage >= volts` would wave NaN through.
            let headroom = self.power.volts - led.fwd_voltage;
            if !headroom.is_finite() || headroom <= 0.0 {
                return Err(Error::InvalidVoltage {
                    color: led.color.clone(),
                    fwd_voltage: led.fwd_voltage,
                    supply: self.power.volts,
                });
            }

            resistors.insert(led.color.clone(), headroom / led.max_current);
        }

        Ok(resistors)
    }

    /// Check the total LED operating current against the transistor's rating
    /// and the supply's available current.
    ///
    /// Advisory only: the sizing formula deliberately ignores these limits,
    /// but a bank drawing more than the driver can sink will brown out on a
    /// real board. A supply rating of `0.0` is treated as unspecified and
    /// not checked.
    pub fn check_current_budget(&self) -> Vec<BudgetWarning> {
        let drawn: f64 = self.leds.iter().map(|led| led.max_current).sum();
        let mut warnings = Vec::new();

        if drawn > self.transistor.max_current {
            warnings.push(BudgetWarning {
                limit: BudgetLimit::Transistor,
                drawn,
                available: self.transistor.max_current,
            });
        }
        if self.power.amps > 0.0 && drawn > self.power.amps {
            warnings.push(BudgetWarning {
                limit: BudgetLimit::Supply,
                drawn,
                available: self.power.amps,
            });
        }

        warnings
    }
}

/// A usable current rating: finite and strictly positive.
fn valid_rating(amps: f64) -> bool {
    amps.is_finite() && amps > 0.0
}

/// Which current limit a [`BudgetWarning`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLimit {
    /// The driving transistor's maximum collector current.
    Transistor,
    /// The supply's available current.
    Supply,
}

/// An advisory current-budget violation.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetWarning {
    /// The limit being exceeded.
    pub limit: BudgetLimit,
    /// Total LED operating current in amps.
    pub drawn: f64,
    /// The limit's value in amps.
    pub available: f64,
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = match self.limit {
            BudgetLimit::Transistor => "transistor rating",
            BudgetLimit::Supply => "supply rating",
        };
        write!(
            f,
            "LED bank draws {} A, exceeding the {} of {} A",
            self.drawn, limit, self.available
        )
    }
}
