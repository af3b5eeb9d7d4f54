//! Registry record generation for Kubernetes releases
//!
//! Builds the API → version → spec tree from a version table and writes it
//! to `<out-root>/kubernetes/info.yaml`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::models::{
    Api, ApiData, ApiSpec, ApiSpecData, ApiVersion, ApiVersionData, Header, Labels,
};
use crate::output::encode_yaml;
use crate::version::{self, Version};

/// Identifier of the generated API
pub const API_ID: &str = "kubernetes";

/// File written inside the API directory
pub const INFO_FILE: &str = "info.yaml";

const DISPLAY_NAME: &str = "Kubernetes";
const DESCRIPTION: &str = "The Kubernetes API";
const CATEGORIES: &str = "computing";
const PROVIDER: &str = "kubernetes-io";

const SPEC_NAME: &str = "swagger";
const SPEC_FILE_NAME: &str = "swagger.json";
const SPEC_MIME_TYPE: &str = "application/x.openapi+gzip;version=2.0";

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub path: PathBuf,
    pub versions: usize,
    pub bytes: usize,
}

/// Generates the Kubernetes API record
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    updated: String,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let updated = config.updated_label();
        Self { config, updated }
    }

    /// Labels carried by every record
    fn run_labels(&self) -> Labels {
        let mut labels = Labels::new();
        labels.insert("updated".to_string(), self.updated.clone());
        labels.insert("source".to_string(), self.config.source.clone());
        labels
    }

    fn api_labels(&self) -> Labels {
        let mut labels = self.run_labels();
        labels.insert("categories".to_string(), CATEGORIES.to_string());
        labels.insert("provider".to_string(), PROVIDER.to_string());
        labels
    }

    fn version_record(&self, version: Version) -> ApiVersion {
        let name = version.sortable_name();

        let spec = ApiSpec {
            header: Header::child(SPEC_NAME, self.run_labels()),
            data: ApiSpecData {
                file_name: SPEC_FILE_NAME.to_string(),
                mime_type: SPEC_MIME_TYPE.to_string(),
                source_uri: version.source_uri(),
                ..ApiSpecData::default()
            },
        };

        ApiVersion {
            header: Header::child(name.clone(), self.run_labels()),
            data: ApiVersionData {
                display_name: name,
                api_specs: vec![spec],
                ..ApiVersionData::default()
            },
        }
    }

    /// Build the full record tree in table order
    pub fn build(&self) -> Api {
        let api_versions: Vec<ApiVersion> = self
            .config
            .table
            .iter()
            .flat_map(|range| range.versions())
            .map(|v| self.version_record(v))
            .collect();

        log::info!(
            "Built {} versions from {} release lines",
            api_versions.len(),
            self.config.table.len()
        );

        Api {
            header: Header::document("API", API_ID, self.api_labels()),
            data: ApiData {
                display_name: DISPLAY_NAME.to_string(),
                description: DESCRIPTION.to_string(),
                api_versions,
            },
        }
    }

    /// Directory holding the generated API files
    pub fn output_dir(&self) -> PathBuf {
        self.config.out_root.join(API_ID)
    }

    /// Full path of the generated info file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(INFO_FILE)
    }

    /// Create the output directory and any missing parents
    pub fn ensure_output_dir(&self) -> Result<PathBuf> {
        let dir = self.output_dir();

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o777);
        }

        builder.create(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;

        log::debug!("Output directory ready: {}", dir.display());
        Ok(dir)
    }

    /// Encode the record and write it to the info file
    pub fn write(&self, api: &Api) -> Result<Summary> {
        let contents = encode_yaml(api)?;
        let path = self.output_path();

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        options
            .open(&path)
            .and_then(|mut file| file.write_all(contents.as_bytes()))
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;

        log::info!("Wrote {} bytes to {}", contents.len(), path.display());

        Ok(Summary {
            path,
            versions: api.data.api_versions.len(),
            bytes: contents.len(),
        })
    }

    /// Build, create the output directory, then encode and write
    pub fn run(&self) -> Result<Summary> {
        log::debug!(
            "Generating {} versions for {}",
            version::total_versions(&self.config.table),
            API_ID
        );

        let api = self.build();
        self.ensure_output_dir()?;
        self.write(&api)
    }
}
