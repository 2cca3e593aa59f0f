//! Engineering-unit helpers: SI-suffix parsing, resistance formatting, and
//! E12 preferred-value rounding.

/// Parse a numeric value with an optional SPICE-style SI suffix.
///
/// Suffixes are case-insensitive: `T` (1e12), `G` (1e9), `MEG` (1e6),
/// `K` (1e3), `M` (1e-3), `U` (1e-6), `N` (1e-9), `P` (1e-12). Note the
/// SPICE convention: `M` is milli, mega is spelled `MEG`.
///
/// Only finite numbers are accepted: `inf` and `nan` spellings that
/// `f64::parse` would admit are rejected, so non-finite values cannot
/// enter a circuit through a board file.
pub fn parse_value(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Plain number, possibly with an exponent.
    if let Ok(v) = s.parse::<f64>() {
        return finite(v);
    }

    // Longest suffix first so "10MEG" is not read as "10ME" + giga.
    const SUFFIXES: [(&str, f64); 8] = [
        ("MEG", 1e6),
        ("T", 1e12),
        ("G", 1e9),
        ("K", 1e3),
        ("M", 1e-3),
        ("U", 1e-6),
        ("N", 1e-9),
        ("P", 1e-12),
    ];

    let upper = s.to_ascii_uppercase();
    for (suffix, multiplier) in SUFFIXES {
        if let Some(num) = upper.strip_suffix(suffix) {
            return num.parse::<f64>().ok().and_then(|v| finite(v * multiplier));
        }
    }

    None
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// Format a resistance in ohms with an m/k/M prefix.
pub fn format_resistance(ohms: f64) -> String {
    let abs = ohms.abs();

    let (scaled, unit) = if abs >= 1e6 {
        (ohms / 1e6, "MΩ")
    } else if abs >= 1e3 {
        (ohms / 1e3, "kΩ")
    } else if abs >= 1.0 || abs == 0.0 {
        (ohms, "Ω")
    } else {
        (ohms * 1e3, "mΩ")
    };

    format!("{:.2} {}", scaled, unit)
}

/// Round a resistance up to the next E12 preferred value.
///
/// Rounding up keeps the LED current at or below its rating; rounding to
/// the nearest value could exceed it. Values that already sit on an E12
/// step are returned unchanged. Non-positive or non-finite inputs are
/// passed through untouched.
pub fn nearest_e12(ohms: f64) -> f64 {
    const E12: [f64; 12] = [
        1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2,
    ];

    if !ohms.is_finite() || ohms <= 0.0 {
        return ohms;
    }

    let decade = 10f64.powf(ohms.log10().floor());
    let mantissa = ohms / decade;

    for step in E12 {
        if step >= mantissa - 1e-9 {
            return step * decade;
        }
    }
    10.0 * decade
}
