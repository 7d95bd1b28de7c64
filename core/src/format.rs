//! Text rendering of samples.
//!
//! Values use the shortest decimal digits that parse back to the same
//! `f64`. Magnitudes in `[1e-4, 1e16)` and zero are written positionally
//! and always carry a decimal point (`1.0`, `0.5877852522924731`). Anything
//! else is written in scientific form with a signed exponent of at least
//! two digits (`1.2246467991473532e-16`, `1e-05`, `1e+16`).

use crate::table::SampleTable;

const MIN_POSITIONAL_EXP: i32 = -4;
const MAX_POSITIONAL_EXP: i32 = 16;

pub fn format_sample(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value == 0.0 || (MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&exponent) {
        let mut positional = format!("{}", value);
        if !positional.contains('.') {
            positional.push_str(".0");
        }
        positional
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    }
}

/// Renders every sample followed by `eol`.
pub fn render(table: &SampleTable, eol: &str) -> String {
    let mut out = String::with_capacity(table.len() * (20 + eol.len()));
    for value in table.iter() {
        out.push_str(&format_sample(value));
        out.push_str(eol);
    }
    out
}
