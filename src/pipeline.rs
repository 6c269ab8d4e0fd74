//! Pipeline orchestration: artifact loading, scoring, and report assembly.
//!
//! `PipelineContext::load` replaces the original application's
//! module-level globals with an explicit context object; each `run` is a
//! pure function of the loaded artifacts and the dataset file, with no
//! state carried between runs.

use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::data::ScoredRecord;
use crate::dataset::Dataset;
use crate::errors::{PipelineError, PipelineWarning};
use crate::labels::{self, IndicatorColumn};
use crate::model::{FeatureSchema, SeverityModel};
use crate::ranking;
use crate::report::RiskReport;
use crate::types::ColumnName;

/// Loaded artifacts plus configuration: everything a run needs.
#[derive(Debug)]
pub struct PipelineContext {
    model: SeverityModel,
    schema: FeatureSchema,
    config: PipelineConfig,
}

impl PipelineContext {
    /// Load the model and feature-schema artifacts.
    ///
    /// A missing or undecodable artifact is fatal; no ranking can be
    /// produced without them.
    pub fn load(config: PipelineConfig) -> Result<Self, PipelineError> {
        let model = SeverityModel::from_json_path(&config.paths.model)?;
        let schema = FeatureSchema::from_json_path(&config.paths.features)?;
        debug!(
            trees = model.n_trees(),
            feature_columns = schema.len(),
            "pipeline artifacts loaded"
        );
        Ok(Self {
            model,
            schema,
            config,
        })
    }

    /// The loaded severity model.
    pub fn model(&self) -> &SeverityModel {
        &self.model
    }

    /// The loaded feature schema.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Execute one full run: load the dataset, reconstruct labels, score,
    /// aggregate, rank, and assemble the report.
    ///
    /// Recoverable conditions (missing dataset, no indicator columns,
    /// missing feature columns, degenerate normalization) degrade to an
    /// empty or default result and are returned as warnings.
    pub fn run(&self) -> Result<RiskReport, PipelineError> {
        let mut warnings = Vec::new();
        let dataset = self.load_dataset(&mut warnings)?;
        let entries = match self.score_dataset(&dataset, &mut warnings) {
            Some(records) => ranking::summarize(&records, &self.config.ranking),
            None => Vec::new(),
        };
        if ranking::has_degenerate_span(&entries) {
            warn!("all retained probabilities are equal; markers use the minimum radius");
            warnings.push(PipelineWarning::DegenerateNormalization);
        }
        debug!(entries = entries.len(), warnings = warnings.len(), "run complete");
        Ok(RiskReport::from_summaries(entries, warnings))
    }

    fn load_dataset(&self, warnings: &mut Vec<PipelineWarning>) -> Result<Dataset, PipelineError> {
        let path = &self.config.paths.dataset;
        if !path.exists() {
            warn!(path = %path.display(), "dataset not found; proceeding with an empty dataset");
            warnings.push(PipelineWarning::DatasetMissing {
                path: path.display().to_string(),
            });
            return Ok(Dataset::empty_with_headers(self.schema.columns().to_vec()));
        }
        Dataset::from_csv_path(path)
    }

    /// Score every row, or return `None` when the ranking is unavailable.
    fn score_dataset(
        &self,
        dataset: &Dataset,
        warnings: &mut Vec<PipelineWarning>,
    ) -> Option<Vec<ScoredRecord>> {
        let candidates = labels::indicator_columns(dataset.headers());
        if candidates.is_empty() {
            warn!("no neighborhood indicator columns found; ranking unavailable");
            warnings.push(PipelineWarning::NoIndicatorColumns);
            return None;
        }
        let missing: Vec<ColumnName> = self
            .schema
            .columns()
            .iter()
            .filter(|column| dataset.column_index(column).is_none())
            .cloned()
            .collect();
        if !missing.is_empty() {
            warn!(?missing, "required feature columns missing; ranking unavailable");
            warnings.push(PipelineWarning::MissingFeatureColumns { missing });
            return None;
        }
        Some(score_records(&self.model, &self.schema, dataset, &candidates))
    }
}

/// Score every dataset row, pairing each percent-scale probability with
/// its reconstructed neighborhood label.
///
/// Feature columns are resolved through `schema` order; the caller is
/// responsible for verifying they exist (rows fall back to `0.0` for any
/// unresolved column). Rows are scored in input order.
pub fn score_records(
    model: &SeverityModel,
    schema: &FeatureSchema,
    dataset: &Dataset,
    candidates: &[IndicatorColumn],
) -> Vec<ScoredRecord> {
    let feature_indices: Vec<Option<usize>> = schema
        .columns()
        .iter()
        .map(|column| dataset.column_index(column))
        .collect();
    dataset
        .rows()
        .iter()
        .filter_map(|row| {
            let label = labels::reconstruct_label(row, candidates)?;
            let features: Vec<f64> = feature_indices
                .iter()
                .map(|index| index.and_then(|idx| row.get(idx).copied()).unwrap_or(0.0))
                .collect();
            let probability = model.predict_probability(&features) * 100.0;
            Some(ScoredRecord::new(label, probability))
        })
        .collect()
}
