use anyhow::Context;
use log::info;
use std::path::{Path, PathBuf};
use wavecore::generator::{generate, parse_sample_count};
use wavecore::math::StatsHelper;
use wavecore::output::write_csv;
use wavecore::WaveformConfig;

pub struct WorkflowResult {
    pub path: PathBuf,
    pub sample_count: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: WaveformConfig,
}

impl Runner {
    pub fn new(config: WaveformConfig) -> Self {
        Self { config }
    }

    /// Parses the sample count, tabulates one period and writes `<outfile>.csv`.
    ///
    /// Nothing touches the filesystem until the table has been generated.
    pub fn execute(&self, outfile: &Path, samples: &str) -> anyhow::Result<WorkflowResult> {
        let sample_count = parse_sample_count(samples).context("parsing SAMPLES")?;
        let table = generate(&self.config, sample_count)
            .with_context(|| format!("generating {} samples", sample_count))?;
        let path = write_csv(outfile, &table, &self.config)
            .with_context(|| format!("writing sample table for {}", outfile.display()))?;

        info!(
            "{}: samples={} rms={:.6} peak={:.6}",
            path.display(),
            sample_count,
            StatsHelper::rms(table.values()),
            StatsHelper::peak(table.values())
        );

        Ok(WorkflowResult { path, sample_count })
    }
}
