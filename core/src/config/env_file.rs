//! Loader for the local `.env` definitions file
//!
//! Values from the file only fill gaps: a variable that is already present in
//! the process environment is never overwritten. A missing file is not an
//! error, and malformed lines are skipped with a warning.

use crate::error::{ConfigError, Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default name of the definitions file, looked up relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Outcome of merging a definitions file into the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvFileReport {
    /// Path that was looked up
    pub path: PathBuf,
    /// Whether the file existed
    pub found: bool,
    /// Variables set from the file
    pub applied: Vec<String>,
    /// Variables left alone because the process already defined them
    pub preserved: Vec<String>,
    /// Number of lines that could not be parsed
    pub malformed_lines: usize,
}

/// Merges `KEY=VALUE` definitions into the process environment
#[derive(Debug, Clone)]
pub struct EnvFileLoader {
    path: PathBuf,
}

impl EnvFileLoader {
    /// Create a loader for the given definitions file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the definitions file this loader reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and apply every variable that is not already set
    pub fn load(&self) -> Result<EnvFileReport> {
        let mut report = EnvFileReport {
            path: self.path.clone(),
            ..Default::default()
        };

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No environment file at {}", self.path.display());
                return Ok(report);
            }
            Err(source) => return Err(self.read_error(source)),
        };
        report.found = true;

        for entry in dotenvy::from_read_iter(file) {
            match entry {
                Ok((key, value)) => {
                    if std::env::var_os(&key).is_some() {
                        debug!("Keeping existing value for {}", key);
                        report.preserved.push(key);
                    } else {
                        std::env::set_var(&key, value);
                        debug!("Loaded {} from {}", key, self.path.display());
                        report.applied.push(key);
                    }
                }
                // The offending line has already been consumed by the reader
                Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::InvalidData => {
                    warn!(
                        "Skipping line that is not valid UTF-8 in {}: {}",
                        self.path.display(),
                        err
                    );
                    report.malformed_lines += 1;
                }
                Err(dotenvy::Error::Io(source)) => return Err(self.read_error(source)),
                Err(err) => {
                    warn!(
                        "Skipping malformed line in {}: {}",
                        self.path.display(),
                        err
                    );
                    report.malformed_lines += 1;
                }
            }
        }

        debug!(
            "Environment file {} applied {} variable(s), preserved {}",
            self.path.display(),
            report.applied.len(),
            report.preserved.len()
        );

        Ok(report)
    }

    fn read_error(&self, source: std::io::Error) -> Error {
        ConfigError::EnvFile {
            path: self.path.clone(),
            source,
        }
        .into()
    }
}

impl Default for EnvFileLoader {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn env_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        std::env::set_var("COUNCIL_TEST_UNTOUCHED", "before");

        let report = EnvFileLoader::new(dir.path().join(".env")).load().unwrap();

        assert!(!report.found);
        assert!(report.applied.is_empty());
        assert_eq!(
            std::env::var("COUNCIL_TEST_UNTOUCHED").unwrap(),
            "before"
        );
        std::env::remove_var("COUNCIL_TEST_UNTOUCHED");
    }

    #[test]
    #[serial]
    fn test_applies_unset_variables() {
        std::env::remove_var("COUNCIL_TEST_FRESH");
        let file = env_file("# comment\n\nCOUNCIL_TEST_FRESH=from-file\n");

        let report = EnvFileLoader::new(file.path()).load().unwrap();

        assert!(report.found);
        assert_eq!(report.applied, vec!["COUNCIL_TEST_FRESH".to_string()]);
        assert_eq!(std::env::var("COUNCIL_TEST_FRESH").unwrap(), "from-file");
        std::env::remove_var("COUNCIL_TEST_FRESH");
    }

    #[test]
    #[serial]
    fn test_does_not_override_existing_variables() {
        std::env::set_var("COUNCIL_TEST_PRESET", "from-process");
        let file = env_file("COUNCIL_TEST_PRESET=from-file\n");

        let report = EnvFileLoader::new(file.path()).load().unwrap();

        assert_eq!(report.preserved, vec!["COUNCIL_TEST_PRESET".to_string()]);
        assert!(report.applied.is_empty());
        assert_eq!(
            std::env::var("COUNCIL_TEST_PRESET").unwrap(),
            "from-process"
        );
        std::env::remove_var("COUNCIL_TEST_PRESET");
    }

    #[test]
    #[serial]
    fn test_malformed_lines_are_skipped() {
        std::env::remove_var("COUNCIL_TEST_BEFORE");
        std::env::remove_var("COUNCIL_TEST_AFTER");
        let file = env_file(
            "COUNCIL_TEST_BEFORE=one\nthis line has no equals sign\nCOUNCIL_TEST_AFTER=two\n",
        );

        let report = EnvFileLoader::new(file.path()).load().unwrap();

        assert_eq!(report.malformed_lines, 1);
        assert_eq!(std::env::var("COUNCIL_TEST_BEFORE").unwrap(), "one");
        assert_eq!(std::env::var("COUNCIL_TEST_AFTER").unwrap(), "two");
        std::env::remove_var("COUNCIL_TEST_BEFORE");
        std::env::remove_var("COUNCIL_TEST_AFTER");
    }

    #[test]
    #[serial]
    fn test_invalid_utf8_line_is_skipped() {
        std::env::remove_var("COUNCIL_TEST_LATIN_BEFORE");
        std::env::remove_var("COUNCIL_TEST_LATIN_AFTER");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"COUNCIL_TEST_LATIN_BEFORE=1\n# caf\xe9 latin-1 comment\nCOUNCIL_TEST_LATIN_AFTER=2\n",
        )
        .unwrap();

        let report = EnvFileLoader::new(file.path()).load().unwrap();

        assert!(report.found);
        assert_eq!(report.malformed_lines, 1);
        assert_eq!(
            report.applied,
            vec![
                "COUNCIL_TEST_LATIN_BEFORE".to_string(),
                "COUNCIL_TEST_LATIN_AFTER".to_string()
            ]
        );
        assert_eq!(std::env::var("COUNCIL_TEST_LATIN_BEFORE").unwrap(), "1");
        assert_eq!(std::env::var("COUNCIL_TEST_LATIN_AFTER").unwrap(), "2");
        std::env::remove_var("COUNCIL_TEST_LATIN_BEFORE");
        std::env::remove_var("COUNCIL_TEST_LATIN_AFTER");
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        // A directory exists but cannot be read as a definitions file
        let dir = tempdir().unwrap();

        let err = EnvFileLoader::new(dir.path()).load().unwrap_err();

        match err {
            Error::Config(ConfigError::EnvFile { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_path() {
        assert_eq!(EnvFileLoader::default().path(), Path::new(".env"));
    }
}
