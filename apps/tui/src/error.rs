use std::path::PathBuf;
use thiserror::Error;

/// Failures that keep the chart from initializing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch dataset {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no records with overall above {min_overall} in dataset")]
    Empty { min_overall: f64 },

    #[error("default selection {0:?} is not in the dataset")]
    MissingDefault(String),
}

/// Failures of a single chart interaction. None of them invalidate the chart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("unknown selection {0:?}")]
    UnknownSelection(String),

    #[error("chart is not initialized yet")]
    NotInitialized,
}
