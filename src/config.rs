use std::path::{Path, PathBuf};

use crate::constants::{artifacts, ranking};

/// Filesystem locations of the three pipeline inputs.
#[derive(Clone, Debug)]
pub struct ArtifactPaths {
    /// Serialized severity model (JSON). Required.
    pub model: PathBuf,
    /// Ordered feature-column schema (JSON). Required.
    pub features: PathBuf,
    /// Processed numeric dataset (CSV). Optional; runs degrade without it.
    pub dataset: PathBuf,
}

impl ArtifactPaths {
    /// Resolve the default artifact file names under `base`.
    pub fn for_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            model: base.join(artifacts::MODEL_FILENAME),
            features: base.join(artifacts::FEATURES_FILENAME),
            dataset: base.join(artifacts::DATASET_FILENAME),
        }
    }
}

/// Controls ranking truncation, highlighting, and marker normalization.
#[derive(Clone, Copy, Debug)]
pub struct RankingConfig {
    /// Maximum number of neighborhood summaries retained.
    pub top_n: usize,
    /// Number of leading ranks flagged as highlighted.
    pub highlight_count: usize,
    /// Marker radius assigned to the lowest retained probability.
    pub min_radius: f64,
    /// Marker radius assigned to the highest retained probability.
    pub max_radius: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: ranking::TOP_N,
            highlight_count: ranking::HIGHLIGHT_COUNT,
            min_radius: ranking::MIN_RADIUS,
            max_radius: ranking::MAX_RADIUS,
        }
    }
}

/// Top-level pipeline configuration.
///
/// All state a run needs is carried here explicitly; there is no
/// process-wide configuration.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Artifact and dataset locations.
    pub paths: ArtifactPaths,
    /// Ranking engine settings.
    pub ranking: RankingConfig,
}

impl PipelineConfig {
    /// Build a configuration with default file names under `base` and
    /// default ranking settings.
    pub fn for_dir(base: impl AsRef<Path>) -> Self {
        Self {
            paths: ArtifactPaths::for_dir(base),
            ranking: RankingConfig::default(),
        }
    }
}
