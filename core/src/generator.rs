use crate::config::WaveformConfig;
use crate::prelude::{WaveformError, WaveformResult};
use crate::table::SampleTable;
use log::{debug, warn};
use std::f64::consts::PI;

const NORMALIZED_MIN: f64 = -1.0;
const NORMALIZED_MAX: f64 = 1.0;

/// Parses the requested sample count.
///
/// Surrounding whitespace is ignored and single underscores between digits
/// are accepted as separators (`1_024`). Zero is accepted here and rejected
/// by [`phase_increment`].
pub fn parse_sample_count(text: &str) -> WaveformResult<usize> {
    let trimmed = text.trim();
    let digits = strip_digit_separators(trimmed).unwrap_or_else(|| trimmed.to_string());
    digits
        .parse::<usize>()
        .map_err(|source| WaveformError::InvalidSampleCount {
            input: text.to_string(),
            source,
        })
}

// Returns None when an underscore is not flanked by digits, leaving the
// original text to fail in the integer parser.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let flanked = before.is_some_and(|c| c.is_ascii_digit())
            && after.is_some_and(|c| c.is_ascii_digit());
        if !flanked {
            return None;
        }
    }
    Some(text.replace('_', ""))
}

/// Phase step between consecutive samples so the table spans one period.
pub fn phase_increment(samples: usize) -> WaveformResult<f64> {
    if samples == 0 {
        return Err(WaveformError::ZeroSamples);
    }
    Ok(PI * 2.0 / samples as f64)
}

/// Tabulates one period of `offset + sin(omega + i * increment) * scale`.
pub fn generate(config: &WaveformConfig, samples: usize) -> WaveformResult<SampleTable> {
    let increment = phase_increment(samples)?;
    debug!("phase increment {} rad over {} samples", increment, samples);

    let mut values = Vec::with_capacity(samples);
    for i in 0..samples {
        let value = config.offset + (config.omega + i as f64 * increment).sin() * config.scale;
        values.push(value);
    }

    let out_of_range = values
        .iter()
        .filter(|v| !(NORMALIZED_MIN..=NORMALIZED_MAX).contains(*v))
        .count();
    if out_of_range > 0 {
        warn!(
            "{} of {} samples fall outside [{}, {}]; ARB converters expect normalized input",
            out_of_range, samples, NORMALIZED_MIN, NORMALIZED_MAX
        );
    }

    Ok(SampleTable::new(values))
}
