//! Pre-trained severity model and feature schema artifacts.
//!
//! The classifier is trained offline and exported as JSON: a boosted
//! ensemble of regression trees in the parallel-array layout used by
//! sklearn tree exports. This module decodes and evaluates the artifact;
//! it never trains or mutates it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::types::ColumnName;

/// A regression tree stored as parallel node arrays.
///
/// `feature[i] < 0` marks node `i` as a leaf; `value[i]` is then the leaf
/// contribution. Interior nodes route samples with
/// `features[feature[i]] <= threshold[i]` to `left[i]`, the rest to
/// `right[i]`. Child indices always point strictly forward in the array,
/// so traversal is bounded by the node count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegressionTree {
    /// Split feature index per node; negative marks a leaf.
    pub feature: Vec<i32>,
    /// Split threshold per node (ignored for leaves).
    pub threshold: Vec<f64>,
    /// Left child index per node.
    pub left: Vec<i32>,
    /// Right child index per node.
    pub right: Vec<i32>,
    /// Leaf contribution per node (ignored for interior nodes).
    pub value: Vec<f64>,
}

impl RegressionTree {
    /// Evaluate the tree for one feature row.
    ///
    /// Feature indices outside the row read as `0.0`, matching the
    /// zero-fill used for absent dataset cells.
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut idx = 0usize;
        loop {
            let feature = self.feature[idx];
            if feature < 0 {
                return self.value[idx];
            }
            let observed = features.get(feature as usize).copied().unwrap_or(0.0);
            idx = if observed <= self.threshold[idx] {
                self.left[idx] as usize
            } else {
                self.right[idx] as usize
            };
        }
    }

    fn validate(&self) -> Result<(), String> {
        let n = self.feature.len();
        if n == 0 {
            return Err("tree has no nodes".into());
        }
        if self.threshold.len() != n
            || self.left.len() != n
            || self.right.len() != n
            || self.value.len() != n
        {
            return Err("inconsistent node array lengths".into());
        }
        for idx in 0..n {
            if self.feature[idx] < 0 {
                continue;
            }
            let left = self.left[idx];
            let right = self.right[idx];
            if left < 0 || right < 0 || left as usize >= n || right as usize >= n {
                return Err(format!("node {idx} has out-of-range children"));
            }
            // Children must point strictly forward. Array exports emit
            // nodes topologically, and forward-only pointers guarantee
            // traversal terminates; anything else is a corrupt artifact.
            if left as usize <= idx || right as usize <= idx {
                return Err(format!("node {idx} has non-forward children"));
            }
        }
        Ok(())
    }
}

/// Pre-trained gradient-boosted severity classifier (inference only).
///
/// The probability of a severe outcome is
/// `sigmoid(initial_score + learning_rate * sum(tree contributions))`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeverityModel {
    /// Base log-odds before any tree contribution.
    pub initial_score: f64,
    /// Shrinkage applied to the summed tree contributions.
    pub learning_rate: f64,
    /// Boosted regression trees, evaluated in order.
    pub trees: Vec<RegressionTree>,
    /// Number of features the model was trained on.
    pub n_features: usize,
}

impl SeverityModel {
    /// Load and validate a model artifact from a JSON file.
    ///
    /// A missing file is `MissingArtifact`; a present but undecodable or
    /// structurally invalid file is `ArtifactFormat`. Both are fatal.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::MissingArtifact {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        let model: Self =
            serde_json::from_str(&raw).map_err(|err| PipelineError::ArtifactFormat {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        model.validate().map_err(|reason| PipelineError::ArtifactFormat {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("model has no trees".into());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|reason| format!("tree {idx}: {reason}"))?;
        }
        Ok(())
    }

    /// Probability of a severe outcome for one feature row, in `[0, 1]`.
    pub fn predict_probability(&self, features: &[f64]) -> f64 {
        let margin: f64 = self.trees.iter().map(|tree| tree.evaluate(features)).sum();
        sigmoid(self.initial_score + self.learning_rate * margin)
    }

    /// Score many rows, returning one probability per row in input order.
    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|row| self.predict_probability(row)).collect()
    }

    /// Number of trees in the ensemble.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Ordered list of feature columns the model requires for scoring.
///
/// Every listed column must be present in the dataset; the order defines
/// the feature-vector layout passed to the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<ColumnName>,
}

impl FeatureSchema {
    /// Build a schema from an ordered column list.
    pub fn new(columns: Vec<ColumnName>) -> Self {
        Self { columns }
    }

    /// Load a schema artifact (a JSON array of column names).
    ///
    /// Same failure taxonomy as [`SeverityModel::from_json_path`].
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::MissingArtifact {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|err| PipelineError::ArtifactFormat {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Required feature columns, in feature-vector order.
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Number of required columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema lists no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single stump: f[0] <= 0.5 contributes -2.0, else +2.0.
    fn stump_model() -> SeverityModel {
        SeverityModel {
            initial_score: 0.0,
            learning_rate: 1.0,
            trees: vec![RegressionTree {
                feature: vec![0, -2, -2],
                threshold: vec![0.5, 0.0, 0.0],
                left: vec![1, -1, -1],
                right: vec![2, -1, -1],
                value: vec![0.0, -2.0, 2.0],
            }],
            n_features: 1,
        }
    }

    #[test]
    fn stump_routes_boundary_left() {
        let model = stump_model();
        assert!(model.predict_probability(&[0.5]) < 0.5);
        assert!(model.predict_probability(&[0.6]) > 0.5);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let model = stump_model();
        for value in [-100.0, 0.0, 0.49, 0.51, 100.0] {
            let p = model.predict_probability(&[value]);
            assert!((0.0..=1.0).contains(&p), "p={p} for value={value}");
        }
    }

    #[test]
    fn batch_preserves_input_order() {
        let model = stump_model();
        let rows = vec![vec![0.0], vec![1.0], vec![0.0]];
        let probs = model.predict_batch(&rows);
        assert_eq!(probs.len(), 3);
        assert_eq!(probs[0], probs[2]);
        assert!(probs[1] > probs[0]);
    }

    #[test]
    fn missing_features_read_as_zero() {
        let model = stump_model();
        assert_eq!(model.predict_probability(&[]), model.predict_probability(&[0.0]));
    }

    #[test]
    fn decode_rejects_out_of_range_children() {
        let json = r#"{
            "initial_score": 0.0,
            "learning_rate": 1.0,
            "trees": [{
                "feature": [0],
                "threshold": [0.5],
                "left": [7],
                "right": [8],
                "value": [0.0]
            }],
            "n_features": 1
        }"#;
        let model: SeverityModel = serde_json::from_str(json).unwrap();
        assert!(model.validate().is_err());
    }

    #[test]
    fn decode_rejects_self_referential_children() {
        // A node pointing at itself would make evaluation loop forever.
        let json = r#"{
            "initial_score": 0.0,
            "learning_rate": 1.0,
            "trees": [{
                "feature": [0],
                "threshold": [0.5],
                "left": [0],
                "right": [0],
                "value": [0.0]
            }],
            "n_features": 1
        }"#;
        let model: SeverityModel = serde_json::from_str(json).unwrap();
        assert!(model.validate().is_err());
    }

    #[test]
    fn decode_rejects_backward_children() {
        // Node 1 routes back to the root: an in-range cycle.
        let json = r#"{
            "initial_score": 0.0,
            "learning_rate": 1.0,
            "trees": [{
                "feature": [0, 0, -2],
                "threshold": [0.5, 0.5, 0.0],
                "left": [1, 0, -1],
                "right": [2, 2, -1],
                "value": [0.0, 0.0, 1.0]
            }],
            "n_features": 1
        }"#;
        let model: SeverityModel = serde_json::from_str(json).unwrap();
        assert!(model.validate().is_err());
    }

    #[test]
    fn schema_decodes_from_plain_array() {
        let schema: FeatureSchema = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(schema.columns(), &["A", "B"]);
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }
}
