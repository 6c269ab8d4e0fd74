//! Aggregation, ranking, truncation, and display normalization.
//!
//! Turns per-record scores into the ordered top-N neighborhood summaries
//! the presentation layer consumes. Ordering is fully deterministic: mean
//! probability descending, then label ascending on exact ties.

use indexmap::IndexMap;

use crate::config::RankingConfig;
use crate::constants::ranking::MARKER_ALPHA;
use crate::data::{NeighborhoodSummary, ScoredRecord};
use crate::types::{NeighborhoodLabel, Probability, RgbaColor};

/// Rank scored records into at most `config.top_n` summaries.
///
/// Groups records by label, computes per-group mean probabilities, sorts
/// descending (label-ascending tie-break), truncates, flags the leading
/// `highlight_count` ranks, and normalizes marker radius and color over
/// the retained entries. Empty input yields an empty ranking.
pub fn summarize(records: &[ScoredRecord], config: &RankingConfig) -> Vec<NeighborhoodSummary> {
    let mut means = group_means(records);
    means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    means.truncate(config.top_n);

    let (prob_min, prob_max) = probability_bounds(&means);
    means
        .into_iter()
        .enumerate()
        .map(|(idx, (label, mean))| {
            let rank = idx + 1;
            let t = interpolation_factor(mean, prob_min, prob_max);
            NeighborhoodSummary {
                label,
                mean_probability: mean,
                rank,
                is_highlighted: rank <= config.highlight_count,
                radius: config.min_radius + t * (config.max_radius - config.min_radius),
                color: marker_color(t),
            }
        })
        .collect()
}

/// Per-label mean probabilities, in first-observed label order.
///
/// Grouping uses an insertion-ordered map so the pre-sort order is itself
/// reproducible; the final ordering never depends on map iteration.
pub fn group_means(records: &[ScoredRecord]) -> Vec<(NeighborhoodLabel, Probability)> {
    let mut groups: IndexMap<NeighborhoodLabel, (f64, usize)> = IndexMap::new();
    for record in records {
        let entry = groups
            .entry(record.neighborhood_label.clone())
            .or_insert((0.0, 0));
        entry.0 += record.severity_probability;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(label, (sum, count))| (label, sum / count as f64))
        .collect()
}

/// Linear position of `value` inside `[min, max]`, clamped to `[0, 1]`.
///
/// A degenerate span (`max == min`, including a single retained entry)
/// maps everything to `0.0`, so normalization never divides by zero.
pub fn interpolation_factor(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= f64::EPSILON {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Two-channel gradient from blue (low) to red (high) at fixed alpha.
pub fn marker_color(t: f64) -> RgbaColor {
    let red = (255.0 * t).round() as u8;
    let blue = (255.0 * (1.0 - t)).round() as u8;
    [red, 0, blue, MARKER_ALPHA]
}

/// Whether the retained entries all share one mean probability.
///
/// Summaries are sorted descending, so comparing the ends suffices.
pub fn has_degenerate_span(entries: &[NeighborhoodSummary]) -> bool {
    match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => {
            entries.len() > 1
                && (first.mean_probability - last.mean_probability).abs() <= f64::EPSILON
        }
        _ => false,
    }
}

fn probability_bounds(means: &[(NeighborhoodLabel, Probability)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, mean) in means {
        min = min.min(*mean);
        max = max.max(*mean);
    }
    (min, max)
}
