use std::path::PathBuf;

/// Common error type for table generation and serialization.
#[derive(thiserror::Error, Debug)]
pub enum WaveformError {
    #[error("invalid sample count {input:?}: {source}")]
    InvalidSampleCount {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("sample count must be at least 1 (phase increment divides by it)")]
    ZeroSamples,
    #[error("line {line}: not a sample value: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid waveform config: {0}")]
    Config(String),
}

pub type WaveformResult<T> = Result<T, WaveformError>;

pub use crate::config::WaveformConfig;
pub use crate::table::SampleTable;
