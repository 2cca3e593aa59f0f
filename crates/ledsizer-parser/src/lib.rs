//! Board-description parser for ledsizer.
//!
//! The format is a line-oriented, SPICE-flavored text file. The first
//! content line is the board title unless it is itself a device card;
//! `*` at line start and `;` anywhere begin comments; `.end` terminates
//! the description.
//!
//! ```text
//! RGB Indicator Board
//! * driven from USB rail
//! POWER 5 1.2
//! LED red 2.2 150m       ; values take SPICE SI suffixes
//! LED green 3.5 150m
//! TRANSISTOR 100m GAIN=200
//! .end
//! ```

pub mod error;

use ledsizer_core::units::parse_value;
use ledsizer_core::{Circuit, Led, Power, Transistor};

pub use error::{Error, Result};

/// A parsed board description.
#[derive(Debug, Clone)]
pub struct Board {
    /// Title line, if the file carries one.
    pub title: Option<String>,
    /// The described circuit.
    pub circuit: Circuit,
}

/// Parse a board description into a [`Board`].
pub fn parse(input: &str) -> Result<Board> {
    let mut title: Option<String> = None;
    let mut seen_content = false;
    let mut power: Option<Power> = None;
    let mut transistor: Option<Transistor> = None;
    let mut leds: Vec<Led> = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;

        // Strip comments.
        let line = match raw_line.split_once(';') {
            Some((content, _)) => content,
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('*') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let keyword = match fields.next() {
            Some(field) => field,
            None => continue,
        };
        let upper = keyword.to_ascii_uppercase();

        // The first content line is the title, unless it is already a card.
        if !seen_content {
            seen_content = true;
            if !is_card_keyword(&upper) {
                title = Some(line.to_string());
                continue;
            }
        }

        match upper.as_str() {
            "POWER" => {
                if power.is_some() {
                    return Err(Error::ParseError {
                        line: line_no,
                        message: "duplicate POWER line".into(),
                    });
                }
                let volts = require_value(&mut fields, "POWER", "volts", line_no)?;
                let amps = match fields.next() {
                    Some(field) => value(field)?,
                    None => 0.0,
                };
                power = Some(Power::new(volts, amps));
            }
            "LED" => {
                let color = fields.next().ok_or_else(|| Error::ParseError {
                    line: line_no,
                    message: "LED line is missing its color label".into(),
                })?;
                let fwd_voltage = require_value(&mut fields, "LED", "forward voltage", line_no)?;
                let max_current = require_value(&mut fields, "LED", "max current", line_no)?;
                leds.push(Led::new(color, fwd_voltage, max_current));
            }
            "TRANSISTOR" => {
                if transistor.is_some() {
                    return Err(Error::ParseError {
                        line: line_no,
                        message: "duplicate TRANSISTOR line".into(),
                    });
                }
                let max_current = require_value(&mut fields, "TRANSISTOR", "max current", line_no)?;
                let gain = match fields.next() {
                    Some(field) => Some(gain_param(field, line_no)?),
                    None => None,
                };
                transistor = Some(match gain {
                    Some(gain) => Transistor::with_gain(max_current, gain),
                    None => Transistor::new(max_current),
                });
            }
            ".END" => break,
            _ => return Err(Error::UnknownElement(keyword.to_string())),
        }
    }

    let power = power.ok_or(Error::MissingElement("POWER"))?;
    let transistor = transistor.ok_or(Error::MissingElement("TRANSISTOR"))?;

    Ok(Board {
        title,
        circuit: Circuit::new(power, leds, transistor),
    })
}

fn is_card_keyword(upper: &str) -> bool {
    matches!(upper, "POWER" | "LED" | "TRANSISTOR" | ".END")
}

fn value(field: &str) -> Result<f64> {
    parse_value(field).ok_or_else(|| Error::InvalidValue(field.to_string()))
}

fn require_value<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    card: &str,
    what: &str,
    line_no: usize,
) -> Result<f64> {
    let field = fields.next().ok_or_else(|| Error::ParseError {
        line: line_no,
        message: format!("{} line is missing its {}", card, what),
    })?;
    value(field)
}

/// Parse a `GAIN=<value>` parameter on a TRANSISTOR card.
fn gain_param(field: &str, line_no: usize) -> Result<f64> {
    match field.split_once('=') {
        Some((key, val)) if key.eq_ignore_ascii_case("GAIN") => value(val),
        _ => Err(Error::ParseError {
            line: line_no,
            message: format!("unexpected TRANSISTOR parameter: {}", field),
        }),
    }
}
