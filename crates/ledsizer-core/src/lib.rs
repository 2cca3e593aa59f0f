//! Core circuit representation and resistor sizing for ledsizer.
//!
//! This crate provides the fundamental data structures for describing an
//! LED indicator circuit (supply, diodes, driving transistor) and the
//! series-resistor sizing computation built on Ohm's law.

pub mod circuit;
pub mod devices;
pub mod error;
pub mod units;

pub use circuit::{BudgetLimit, BudgetWarning, Circuit};
pub use devices::{Led, Power, Transistor};
pub use error::{Error, Result};

/// Re-export of indexmap's ordered map, the sizing result container.
pub use indexmap::IndexMap;
