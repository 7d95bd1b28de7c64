use clap::Parser;
use std::path::PathBuf;
use wavecore::WaveformConfig;
use workflow::runner::Runner;

mod workflow;

const USAGE: &str = "usage: sine2csv OUTFILE SAMPLES";

// Built-in help/version flags are disabled so `-h`, `--help` or `-V` given as
// SAMPLES reach the count parser.
#[derive(Parser)]
#[command(
    name = "sine2csv",
    about = "Write one period of sin() in SAMPLES values, one per line, to OUTFILE.csv",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Output base name; `.csv` is appended
    #[arg(value_name = "OUTFILE", allow_hyphen_values = true)]
    outfile: Option<PathBuf>,
    /// Number of samples in the period (positive integer)
    #[arg(value_name = "SAMPLES", allow_hyphen_values = true)]
    samples: Option<String>,
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Missing arguments are reported on stdout and still exit 0.
    let (Some(outfile), Some(samples)) = (args.outfile, args.samples) else {
        println!("{}", USAGE);
        return Ok(());
    };
    if !args.ignored.is_empty() {
        log::debug!("ignoring extra arguments {:?}", args.ignored);
    }

    let runner = Runner::new(WaveformConfig::default());
    let result = runner.execute(&outfile, &samples)?;
    log::info!(
        "done: {} samples -> {}",
        result.sample_count,
        result.path.display()
    );

    Ok(())
}
