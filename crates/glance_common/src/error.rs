//! Error types for glance_common

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the shared library layer
#[derive(Debug, Error)]
pub enum GlanceError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
