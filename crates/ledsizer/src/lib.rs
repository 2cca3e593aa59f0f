//! # Ledsizer
//!
//! A small toolkit for sizing the series current-limiting resistor of each
//! LED on a fixed-voltage board.
//!
//! ## Quick Start
//!
//! ```rust
//! use ledsizer::prelude::*;
//!
//! // The classic 5 V RGB indicator board
//! let circuit = Circuit::new(
//!     Power::new(5.0, 1.2),
//!     vec![
//!         Led::new("red", 2.2, 0.150),
//!         Led::new("green", 3.5, 0.150),
//!         Led::new("blue", 3.5, 0.150),
//!     ],
//!     Transistor::new(0.100),
//! );
//!
//! let resistors = circuit.calculate_resistors().unwrap();
//! assert!((resistors["green"] - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Board files
//!
//! ```rust
//! let board = ledsizer::parse("POWER 5\nLED red 2.2 150m\nTRANSISTOR 100m\n").unwrap();
//! let resistors = board.circuit.calculate_resistors().unwrap();
//! assert!(resistors.contains_key("red"));
//! ```

// Re-export member crates
pub use ledsizer_core as core;
pub use ledsizer_parser as parser;

// ============================================================================
// Convenient re-exports from ledsizer_core
// ============================================================================

pub use ledsizer_core::{
    // Budget diagnostics
    BudgetLimit,
    BudgetWarning,
    // Circuit composition
    Circuit,
    // Errors
    Error as CoreError,
    // Result container
    IndexMap,
    // Device records
    Led,
    Power,
    Transistor,
};

// Units helpers (exported from submodule)
pub use ledsizer_core::units::{format_resistance, nearest_e12, parse_value};

// ============================================================================
// Convenient re-exports from ledsizer_parser
// ============================================================================

pub use ledsizer_parser::{
    // Parsed board
    Board,
    // Errors
    Error as ParseError,
    // Main parse function
    parse,
};

/// Prelude module containing commonly used types.
///
/// ```rust
/// use ledsizer::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{BudgetWarning, Circuit, Led, Power, Transistor};

    // Parser
    pub use crate::{parse, Board};

    // Units
    pub use crate::{format_resistance, nearest_e12};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_board() {
        let board = parse("Test\nPOWER 5\nLED red 2.2 150m\nTRANSISTOR 100m\n");
        assert!(board.is_ok());
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let led = Led::new("red", 2.2, 0.150);
        assert_eq!(led.color, "red");

        let circuit = Circuit::new(Power::new(5.0, 0.0), vec![led], Transistor::new(0.1));
        assert_eq!(circuit.led_count(), 1);
    }
}
