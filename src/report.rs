//! Display-ready data products built from ranked summaries.
//!
//! The pipeline stops at data: bar series, table rows, and map points are
//! plain serializable values a chart, table, or map renderer consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::NeighborhoodSummary;
use crate::errors::PipelineWarning;
use crate::geo;
use crate::types::{Latitude, Longitude, NeighborhoodLabel, Probability, RgbaColor};

/// One bar in the ordered ranking chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    /// Neighborhood label.
    pub label: NeighborhoodLabel,
    /// Mean severity probability, percent scale.
    pub probability: Probability,
    /// Whether the bar belongs to the leading highlight split.
    pub highlighted: bool,
}

/// One row in the tabular listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// 1-based rank.
    pub rank: usize,
    /// Neighborhood label.
    pub label: NeighborhoodLabel,
    /// Mean severity probability, percent scale.
    pub probability: Probability,
}

/// One marker in the geographic point layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Neighborhood label.
    pub label: NeighborhoodLabel,
    /// Marker latitude (centroid or city-center fallback).
    pub latitude: Latitude,
    /// Marker longitude (centroid or city-center fallback).
    pub longitude: Longitude,
    /// Mean severity probability, percent scale.
    pub probability: Probability,
    /// Marker radius in meters.
    pub radius: f64,
    /// Marker RGBA color.
    pub color: RgbaColor,
}

/// Complete output of one pipeline run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskReport {
    /// When this report was computed.
    pub generated_at: DateTime<Utc>,
    /// Ranked summaries, highest mean first.
    pub entries: Vec<NeighborhoodSummary>,
    /// Bar-chart series derived from `entries`.
    pub bars: Vec<BarEntry>,
    /// Table listing derived from `entries`.
    pub table: Vec<TableRow>,
    /// Map layer derived from `entries`, coordinates resolved with the
    /// city-center fallback for unrecognized labels.
    pub map: Vec<MapPoint>,
    /// Degradations encountered during the run.
    pub warnings: Vec<PipelineWarning>,
}

impl RiskReport {
    /// Build every display product from ranked summaries.
    pub fn from_summaries(
        entries: Vec<NeighborhoodSummary>,
        warnings: Vec<PipelineWarning>,
    ) -> Self {
        let bars = entries
            .iter()
            .map(|summary| BarEntry {
                label: summary.label.clone(),
                probability: summary.mean_probability,
                highlighted: summary.is_highlighted,
            })
            .collect();
        let table = entries
            .iter()
            .map(|summary| TableRow {
                rank: summary.rank,
                label: summary.label.clone(),
                probability: summary.mean_probability,
            })
            .collect();
        let map = entries
            .iter()
            .map(|summary| {
                let (latitude, longitude) = geo::coordinates_or_fallback(&summary.label);
                MapPoint {
                    label: summary.label.clone(),
                    latitude,
                    longitude,
                    probability: summary.mean_probability,
                    radius: summary.radius,
                    color: summary.color,
                }
            })
            .collect();
        Self {
            generated_at: Utc::now(),
            entries,
            bars,
            table,
            map,
            warnings,
        }
    }

    /// Whether the run produced no ranked entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
