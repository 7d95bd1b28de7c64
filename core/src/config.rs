use crate::prelude::{WaveformError, WaveformResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shape constants applied to every generated sample.
///
/// A sample at index `i` is `offset + sin(omega + i * increment) * scale`,
/// and every rendered sample is followed by `eol`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    /// Initial phase in radians.
    pub omega: f64,
    /// Vertical offset added after scaling.
    pub offset: f64,
    /// Amplitude.
    pub scale: f64,
    /// Line terminator written after each sample.
    pub eol: String,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            omega: 0.0,
            offset: 0.0,
            scale: 1.0,
            eol: "\n".to_string(),
        }
    }
}

impl WaveformConfig {
    /// Loads a config from YAML; omitted fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> WaveformResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| WaveformError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> WaveformResult<Self> {
        let config: WaveformConfig =
            serde_yaml::from_str(contents).map_err(|err| WaveformError::Config(err.to_string()))?;
        if config.eol.is_empty() {
            return Err(WaveformError::Config("eol must not be empty".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_describe_unit_sine() {
        let cfg = WaveformConfig::default();
        assert_eq!(cfg.omega, 0.0);
        assert_eq!(cfg.offset, 0.0);
        assert_eq!(cfg.scale, 1.0);
        assert_eq!(cfg.eol, "\n");
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"scale: 0.5\noffset: 0.25\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = WaveformConfig::load(&path).unwrap();
        assert_eq!(cfg.scale, 0.5);
        assert_eq!(cfg.offset, 0.25);
        assert_eq!(cfg.omega, 0.0);
        assert_eq!(cfg.eol, "\n");
    }

    #[test]
    fn empty_eol_is_rejected() {
        let err = WaveformConfig::from_yaml("eol: \"\"\n").unwrap_err();
        assert!(matches!(err, WaveformError::Config(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        match WaveformConfig::load(&missing) {
            Err(WaveformError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
