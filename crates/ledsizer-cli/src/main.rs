//! Ledsizer command-line interface.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ledsizer_core::units::{format_resistance, nearest_e12};
use ledsizer_core::IndexMap;
use ledsizer_parser::{parse, Board};

#[derive(Parser)]
#[command(name = "ledsizer")]
#[command(about = "LED series-resistor sizing tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Input board description file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print exact values only, without the nearest E12 part column
    #[arg(long)]
    exact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref input) = cli.input {
        run_sizing(input, &cli)?;
    } else {
        println!("Ledsizer - LED series-resistor sizing tool");
        println!();
        println!("Usage: ledsizer <board.brd> [options]");
        println!();
        println!("Options:");
        println!("  --exact            Skip the nearest-E12 part column");
        println!("  -v, --verbose      Verbose output");
        println!("  -h, --help         Show help");
        println!("  -V, --version      Show version");
    }

    Ok(())
}

fn run_sizing(input: &PathBuf, cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read board file: {}", input.display()))?;

    let board = parse(&source)
        .with_context(|| format!("failed to parse board file: {}", input.display()))?;

    if let Some(title) = &board.title {
        println!("{}", title);
        println!();
    }

    if cli.verbose {
        print_devices(&board);
    }

    for warning in board.circuit.check_current_budget() {
        eprintln!("Warning: {}", warning);
    }

    let resistors = board
        .circuit
        .calculate_resistors()
        .context("resistor sizing failed")?;

    if resistors.is_empty() {
        println!("Board has no LEDs; nothing to size.");
        return Ok(());
    }

    print_table(&resistors, cli.exact);
    Ok(())
}

fn print_devices(board: &Board) {
    println!(
        "Supply: {} V, {}",
        board.circuit.power.volts,
        if board.circuit.power.amps > 0.0 {
            format!("{} A available", board.circuit.power.amps)
        } else {
            "current unspecified".to_string()
        }
    );
    println!(
        "Driver: {} A max{}",
        board.circuit.transistor.max_current,
        match board.circuit.transistor.gain {
            Some(gain) => format!(", gain {}", gain),
            None => String::new(),
        }
    );
    for led in &board.circuit.leds {
        println!("LED:    {}", led);
    }
    println!();
}

fn print_table(resistors: &IndexMap<String, f64>, exact_only: bool) {
    if exact_only {
        println!("{:<10} {:>12}", "color", "resistor");
        println!("{:-<10} {:->12}", "", "");
    } else {
        println!("{:<10} {:>12} {:>12}", "color", "resistor", "E12 part");
        println!("{:-<10} {:->12} {:->12}", "", "", "");
    }

    for (color, &ohms) in resistors {
        if exact_only {
            println!("{:<10} {:>12}", color, format_resistance(ohms));
        } else {
            println!(
                "{:<10} {:>12} {:>12}",
                color,
                format_resistance(ohms),
                format_resistance(nearest_e12(ohms))
            );
        }
    }
}
