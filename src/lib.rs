#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reusable report runner shared by the CLI binary.
pub mod app;
/// Pipeline configuration types.
pub mod config;
/// Centralized constants used across labeling, ranking, and geo lookup.
pub mod constants;
/// Scored record and neighborhood summary types.
pub mod data;
/// CSV-backed numeric dataset loading.
pub mod dataset;
/// Static neighborhood centroid lookup.
pub mod geo;
/// One-hot indicator parsing and label reconstruction.
pub mod labels;
/// Pre-trained severity model and feature schema artifacts.
pub mod model;
/// Pipeline orchestration and graceful degradation.
pub mod pipeline;
/// Aggregation, ranking, and display normalization.
pub mod ranking;
/// Display-ready report products (bar series, table, map layer).
pub mod report;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{ArtifactPaths, PipelineConfig, RankingConfig};
pub use data::{NeighborhoodSummary, ScoredRecord};
pub use dataset::Dataset;
pub use errors::{PipelineError, PipelineWarning};
pub use labels::{indicator_columns, reconstruct_label, IndicatorColumn};
pub use model::{FeatureSchema, SeverityModel};
pub use pipeline::{score_records, PipelineContext};
pub use ranking::summarize;
pub use report::{BarEntry, MapPoint, RiskReport, TableRow};
pub use types::{ColumnName, Latitude, Longitude, NeighborhoodLabel, Probability, RgbaColor};
