/// Summary statistics over a sample table.
pub struct StatsHelper;

impl StatsHelper {
    /// Root mean square; `0.0` for an empty slice.
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let energy = samples.iter().fold(0.0, |acc: f64, &v| acc + v * v);
        (energy / samples.len() as f64).sqrt()
    }

    /// Largest absolute sample value; `0.0` for an empty slice.
    pub fn peak(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0, |acc: f64, &v| acc.max(v.abs()))
    }
}
