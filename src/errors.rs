use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ColumnName;

/// Error type for artifact loading, dataset parsing, and IO failures.
///
/// Only these conditions abort a run. Recoverable degradations surface as
/// [`PipelineWarning`] values alongside the (possibly empty) ranking.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("required artifact '{path}' is missing")]
    MissingArtifact { path: PathBuf },
    #[error("artifact '{path}' could not be decoded: {reason}")]
    ArtifactFormat { path: PathBuf, reason: String },
    #[error("dataset error: {0}")]
    Dataset(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Non-fatal degradation conditions surfaced alongside a report.
///
/// Each warning corresponds to a branch where the pipeline substitutes an
/// empty or default result instead of failing.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineWarning {
    #[error("dataset '{path}' not found; proceeding with an empty dataset")]
    DatasetMissing { path: String },
    #[error("no neighborhood indicator columns found; ranking unavailable")]
    NoIndicatorColumns,
    #[error("required feature columns missing from dataset: {missing:?}; ranking unavailable")]
    MissingFeatureColumns { missing: Vec<ColumnName> },
    #[error("all retained probabilities are equal; markers use the minimum radius")]
    DegenerateNormalization,
}
