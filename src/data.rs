use serde::{Deserialize, Serialize};

use crate::types::{NeighborhoodLabel, Probability, RgbaColor};

/// One input record after scoring: its reconstructed neighborhood label
/// paired with the model's severity probability.
///
/// Created once per dataset row and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Neighborhood label reconstructed from the row's indicator columns.
    pub neighborhood_label: NeighborhoodLabel,
    /// Probability of a severe outcome, on the percent scale `[0, 100]`.
    pub severity_probability: Probability,
}

impl ScoredRecord {
    /// Pair a label with a percent-scale probability.
    pub fn new(neighborhood_label: impl Into<NeighborhoodLabel>, severity_probability: Probability) -> Self {
        Self {
            neighborhood_label: neighborhood_label.into(),
            severity_probability,
        }
    }
}

/// Aggregate over all scored records sharing a label.
///
/// Fully derived: computed fresh on every run, never persisted or mutated
/// incrementally. Only the top-ranked labels receive a summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodSummary {
    /// Neighborhood label this summary aggregates.
    pub label: NeighborhoodLabel,
    /// Arithmetic mean of member probabilities, percent scale.
    pub mean_probability: Probability,
    /// 1-based rank; 1 = highest mean probability.
    pub rank: usize,
    /// Whether this entry falls in the leading highlight split.
    pub is_highlighted: bool,
    /// Map marker radius in meters, min-max normalized over retained entries.
    pub radius: f64,
    /// Map marker color interpolated from blue (low) to red (high).
    pub color: RgbaColor,
}
