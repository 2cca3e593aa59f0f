//! Error types for ledsizer-core.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{name} has non-positive current rating: {value} A")]
    InvalidRating { name: String, value: f64 },

    #[error(
        "{color} LED forward voltage ({fwd_voltage} V) is not below the supply ({supply} V)"
    )]
    InvalidVoltage {
        color: String,
        fwd_voltage: f64,
        supply: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
