use crate::config::WaveformConfig;
use crate::format::render;
use crate::prelude::{WaveformError, WaveformResult};
use crate::table::SampleTable;
use log::info;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CSV_SUFFIX: &str = ".csv";

/// Appends `.csv` to the base name without touching any existing extension.
pub fn csv_path<P: AsRef<Path>>(base: P) -> PathBuf {
    let mut name = OsString::from(base.as_ref().as_os_str());
    name.push(CSV_SUFFIX);
    PathBuf::from(name)
}

/// Writes the rendered table to `<base>.csv`, replacing any existing file.
///
/// The whole document is rendered first and handed to a single write call.
pub fn write_csv<P: AsRef<Path>>(
    base: P,
    table: &SampleTable,
    config: &WaveformConfig,
) -> WaveformResult<PathBuf> {
    let path = csv_path(base);
    let contents = render(table, &config.eol);
    let io_err = |source| WaveformError::Io {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    info!(
        "wrote {} samples ({} bytes) to {}",
        table.len(),
        contents.len(),
        path.display()
    );
    Ok(path)
}

pub fn read_csv<P: AsRef<Path>>(path: P) -> WaveformResult<SampleTable> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| WaveformError::Io {
        path: path_ref.to_path_buf(),
        source,
    })?;
    SampleTable::parse(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn suffix_is_appended() {
        assert_eq!(csv_path("out"), PathBuf::from("out.csv"));
        assert_eq!(csv_path("data.v1"), PathBuf::from("data.v1.csv"));
        assert_eq!(csv_path("dir/sine"), PathBuf::from("dir/sine.csv"));
    }

    #[test]
    fn written_file_matches_rendered_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = WaveformConfig::default();
        let table = generate(&config, 4).unwrap();

        let path = write_csv(dir.path().join("quad"), &table, &config).unwrap();
        assert_eq!(path, dir.path().join("quad.csv"));

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "0.0");
        assert_eq!(lines[1], "1.0");
        assert!(text.ends_with('\n'));
        assert!(text.is_ascii());
    }

    #[test]
    fn read_back_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let config = WaveformConfig::default();
        let table = generate(&config, 257).unwrap();
        let path = write_csv(dir.path().join("period"), &table, &config).unwrap();
        assert_eq!(read_csv(&path).unwrap(), table);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("again");
        fs::write(csv_path(&base), "stale\nstale\nstale\nstale\nstale\n").unwrap();

        let config = WaveformConfig::default();
        let table = generate(&config, 2).unwrap();
        let path = write_csv(&base, &table, &config).unwrap();
        assert_eq!(read_csv(&path).unwrap().len(), 2);
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = WaveformConfig::default();
        let table = generate(&config, 100).unwrap();
        let first = fs::read(write_csv(dir.path().join("a"), &table, &config).unwrap()).unwrap();
        let second = fs::read(write_csv(dir.path().join("a"), &table, &config).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_destination_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("missing").join("out");
        let table = SampleTable::from(vec![0.0]);
        match write_csv(&base, &table, &WaveformConfig::default()) {
            Err(WaveformError::Io { path, .. }) => assert_eq!(path, csv_path(&base)),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
