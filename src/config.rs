use crate::error::{RaceTallyError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Number of times the target is run when nothing overrides it.
pub const DEFAULT_RUNS: u64 = 1000;

/// Target binary used when nothing overrides it.
pub const DEFAULT_BINARY: &str = "./test";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub runs: u64,
    pub binary: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            binary: PathBuf::from(DEFAULT_BINARY),
        }
    }
}

impl Config {
    /// Load configuration: the named file if one is given, otherwise the
    /// built-in constants. No other location is searched.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                log::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, runs: Option<u64>, binary: Option<PathBuf>) -> Result<Self> {
        if let Some(runs) = runs {
            self.runs = runs;
        }
        if let Some(binary) = binary {
            self.binary = binary;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.binary.as_os_str().is_empty() {
            return Err(RaceTallyError::Config("binary path is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.runs, 1000);
        assert_eq!(config.binary, PathBuf::from("./test"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("racetally.yml");
        fs::write(&path, "runs: 250\nbinary: ./build/aq_test\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.runs, 250);
        assert_eq!(config.binary, PathBuf::from("./build/aq_test"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("racetally.yml");
        fs::write(&path, "runs: 10\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.runs, 10);
        assert_eq!(config.binary, PathBuf::from(DEFAULT_BINARY));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, RaceTallyError::Io(_)));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "runs: 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.runs, 3);
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("racetally.yml");
        fs::write(&path, "runs: lots\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, RaceTallyError::Yaml(_)));
    }

    #[test]
    fn test_load_empty_binary_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("racetally.yml");
        fs::write(&path, "binary: \"\"\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, RaceTallyError::Config(_)));
    }

    #[test]
    fn test_overrides_replace_values() {
        let config = Config::default()
            .with_overrides(Some(4), Some(PathBuf::from("/bin/true")))
            .unwrap();
        assert_eq!(config.runs, 4);
        assert_eq!(config.binary, PathBuf::from("/bin/true"));
    }

    #[test]
    fn test_no_overrides_is_identity() {
        let config = Config::default().with_overrides(None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_runs_allowed() {
        let config = Config::default().with_overrides(Some(0), None).unwrap();
        assert_eq!(config.runs, 0);
    }
}
