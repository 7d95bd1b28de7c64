//! Sine sample-table generation for reference waveform fixtures.
//!
//! The crate computes one period of a sine function as a table of `f64`
//! samples, renders it as newline-delimited decimal text, and writes it to
//! a `.csv` file that arbitrary-waveform tooling can ingest.

pub mod config;
pub mod format;
pub mod generator;
pub mod math;
pub mod output;
pub mod prelude;
pub mod table;

pub use config::WaveformConfig;
pub use prelude::{WaveformError, WaveformResult};
pub use table::SampleTable;
