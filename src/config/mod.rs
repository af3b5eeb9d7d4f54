//! Configuration management for import-kubernetes

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::version::{self, VersionRange};

/// Default output root, relative to the working directory
pub const DEFAULT_OUT_ROOT: &str = "apis/kubernetes.io";

/// Provenance label value stamped on every generated record
pub const SOURCE_TAG: &str = "import-kubernetes";

/// Resolved settings for a single generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the API directory is created under
    pub out_root: PathBuf,

    /// Release lines to expand
    pub table: Vec<VersionRange>,

    /// Value of every `updated` label
    pub updated: NaiveDate,

    /// Value of every `source` label
    pub source: String,
}

impl GeneratorConfig {
    /// Build a config, capturing today's local date when none is pinned
    pub fn new(out_root: PathBuf, table: Vec<VersionRange>, updated: Option<NaiveDate>) -> Self {
        Self {
            out_root,
            table,
            updated: updated.unwrap_or_else(|| Local::now().date_naive()),
            source: SOURCE_TAG.to_string(),
        }
    }

    /// The `updated` label as an ISO calendar date
    pub fn updated_label(&self) -> String {
        self.updated.format("%Y-%m-%d").to_string()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_OUT_ROOT),
            version::builtin_table(),
            None,
        )
    }
}

/// Version table file, replacing the built-in table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionTableFile {
    pub versions: Vec<VersionRange>,
}

impl VersionTableFile {
    /// Load a version table from a YAML file
    pub fn load_from(path: &Path) -> Result<Vec<VersionRange>> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let file: VersionTableFile = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        file.validate()?;
        log::debug!(
            "Loaded {} release lines from {}",
            file.versions.len(),
            path.display()
        );

        Ok(file.versions)
    }

    /// Reject empty tables and repeated release lines
    pub fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(ConfigError::Invalid("version table is empty".to_string()).into());
        }

        let mut seen = HashSet::new();
        for range in &self.versions {
            if !seen.insert((range.major, range.minor)) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate entry for v{}.{}",
                    range.major, range.minor
                ))
                .into());
            }
        }

        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.out_root, PathBuf::from("apis/kubernetes.io"));
        assert_eq!(config.source, "import-kubernetes");
        assert_eq!(config.table.len(), 22);
    }

    #[test]
    fn test_pinned_date_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let config = GeneratorConfig::new(PathBuf::from("out"), vec![], Some(date));
        assert_eq!(config.updated_label(), "2024-03-01");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(parse_date("03/01/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_load_table_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("versions.yaml");
        std::fs::write(
            &path,
            "versions:\n  - major: 1\n    minor: 26\n    latest_patch: 3\n  - { major: 1, minor: 27, latest_patch: 0 }\n",
        )
        .unwrap();

        let table = VersionTableFile::load_from(&path).unwrap();
        assert_eq!(
            table,
            vec![VersionRange::new(1, 26, 3), VersionRange::new(1, 27, 0)]
        );
    }

    #[test]
    fn test_load_missing_table() {
        let temp = tempdir().unwrap();
        let result = VersionTableFile::load_from(&temp.path().join("missing.yaml"));

        match result {
            Err(Error::Config(ConfigError::NotFound(path))) => {
                assert!(path.ends_with("missing.yaml"))
            }
            other => panic!("Expected ConfigError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_table() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("versions.yaml");
        std::fs::write(&path, "versions:\n  - major: one\n").unwrap();

        match VersionTableFile::load_from(&path) {
            Err(Error::Config(ConfigError::ParseError(_))) => (),
            other => panic!("Expected ConfigError::ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let file = VersionTableFile {
            versions: vec![VersionRange::new(1, 26, 3), VersionRange::new(1, 26, 4)],
        };

        match file.validate() {
            Err(Error::Config(ConfigError::Invalid(msg))) => assert!(msg.contains("v1.26")),
            other => panic!("Expected ConfigError::Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        let file = VersionTableFile { versions: vec![] };
        assert!(file.validate().is_err());
    }
}
