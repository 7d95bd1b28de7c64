use crate::prelude::{WaveformError, WaveformResult};

/// Ordered samples covering one period of the waveform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    values: Vec<f64>,
}

impl SampleTable {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Parses a one-value-per-line document.
    ///
    /// Blank lines and lines starting with `#` are skipped. Line numbers in
    /// errors are 1-based.
    pub fn parse(text: &str) -> WaveformResult<Self> {
        let mut values = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let value = line
                .parse::<f64>()
                .map_err(|_| WaveformError::MalformedLine {
                    line: index + 1,
                    content: raw.to_string(),
                })?;
            values.push(value);
        }
        Ok(Self { values })
    }
}

impl From<Vec<f64>> for SampleTable {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a SampleTable {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
