//! CLI definitions and handlers

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, DEFAULT_OUT_ROOT};

pub mod generate;

/// Generate API registry metadata for published Kubernetes API versions
#[derive(Parser, Debug)]
#[command(name = "import-kubernetes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output root; the record is written to <OUT>/kubernetes/info.yaml
    #[arg(
        long,
        env = "IMPORT_KUBERNETES_OUT",
        default_value = DEFAULT_OUT_ROOT,
        hide_env = true
    )]
    pub out: PathBuf,

    /// Date for the `updated` labels (YYYY-MM-DD, defaults to today)
    #[arg(
        long,
        env = "IMPORT_KUBERNETES_DATE",
        value_parser = config::parse_date,
        hide_env = true
    )]
    pub date: Option<NaiveDate>,

    /// YAML version table to use instead of the built-in one
    #[arg(long, env = "IMPORT_KUBERNETES_TABLE", hide_env = true)]
    pub table: Option<PathBuf>,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(long, env = "IMPORT_KUBERNETES_DEBUG", hide_env = true)]
    pub debug: bool,
}

impl Cli {
    /// Initialize logging; `RUST_LOG` still overrides per module
    pub fn init_logging(&self) {
        let level = if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        };

        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }
}
