//! One-hot indicator parsing and neighborhood label reconstruction.
//!
//! The processed dataset encodes the neighborhood as a group of mutually
//! exclusive indicator columns named `NEIGHBOURHOOD_<code>_<Display Name>`,
//! optionally with a trailing `" (<digits>)"` suffix on the display name.
//! Reconstruction collapses that group back into a single label per row.

use crate::constants::labeling::INDICATOR_PREFIX;
use crate::types::{ColumnName, NeighborhoodLabel};

/// A parsed one-hot indicator column: its dataset position plus the
/// cleaned display label it encodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorColumn {
    /// Column position within the dataset header row.
    pub index: usize,
    /// Cleaned human-readable label.
    pub label: NeighborhoodLabel,
}

/// Scan headers in order and collect every indicator column.
///
/// Header order is preserved so downstream tie-breaking is stable.
pub fn indicator_columns(headers: &[ColumnName]) -> Vec<IndicatorColumn> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            clean_indicator_name(name).map(|label| IndicatorColumn { index, label })
        })
        .collect()
}

/// Extract the display label from an indicator column name.
///
/// Strips the `NEIGHBOURHOOD_<code>_` head and any trailing `" (<digits>)"`
/// suffix. Returns `None` when the name does not match the indicator
/// pattern (no prefix, or a prefix without a numeric code).
pub fn clean_indicator_name(name: &str) -> Option<NeighborhoodLabel> {
    let rest = name.strip_prefix(INDICATOR_PREFIX)?;
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let body = rest[digits..].strip_prefix('_')?;
    Some(strip_count_suffix(body).trim().to_string())
}

/// Drop a trailing `" (<digits>)"` record-count suffix, if present.
fn strip_count_suffix(label: &str) -> &str {
    let trimmed = label.trim_end();
    if let Some(open) = trimmed.rfind(" (") {
        let inner = &trimmed[open + 2..];
        if let Some(digits) = inner.strip_suffix(')') {
            if !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit()) {
                return &trimmed[..open];
            }
        }
    }
    trimmed
}

/// Reconstruct one row's neighborhood label by stable-order argmax over
/// its indicator values.
///
/// Candidates are visited in fixed column order and only a strictly
/// greater value replaces the current best, so the first-encountered
/// column wins ties. For well-formed one-hot data (exactly one indicator
/// set to 1) this selects that indicator; for an all-zero row it falls
/// back deterministically to the first candidate.
///
/// Returns `None` only when `candidates` is empty.
pub fn reconstruct_label(
    row: &[f64],
    candidates: &[IndicatorColumn],
) -> Option<NeighborhoodLabel> {
    let mut best: Option<(&IndicatorColumn, f64)> = None;
    for candidate in candidates {
        let value = row.get(candidate.index).copied().unwrap_or(0.0);
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((candidate, value)),
        }
    }
    best.map(|(candidate, _)| candidate.label.clone())
}
