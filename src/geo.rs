//! Static neighborhood centroid lookup.
//!
//! The table is hand-maintained and deliberately sparse; lookup is a
//! partial function and the caller decides whether to apply the
//! city-center fallback. Keeping the incompleteness explicit avoids a
//! lookup that silently always succeeds.

use crate::constants::geo::{FALLBACK_LATITUDE, FALLBACK_LONGITUDE};
use crate::types::{Latitude, Longitude};

/// Known neighborhood centroids, sorted ascending by label for binary
/// search. Entries use the cleaned display labels produced by
/// [`crate::labels::clean_indicator_name`].
const CENTROIDS: &[(&str, Latitude, Longitude)] = &[
    ("Agincourt South-Malvern West", 43.801, -79.246),
    ("Alderwood", 43.634, -79.556),
    ("Annex", 43.670, -79.404),
    ("Banbury-Don Mills", 43.737, -79.349),
    ("Bay Street Corridor", 43.657, -79.385),
    ("Bedford Park-Nortown", 43.733, -79.419),
    ("Black Creek", 43.764, -79.521),
    ("Church-Yonge Corridor", 43.659, -79.379),
    ("Dovercourt-Wallace Emerson-Junction", 43.665, -79.438),
    ("Downsview-Roding-CFB", 43.737, -79.490),
    ("Kensington-Chinatown", 43.653, -79.398),
    ("Malvern", 43.809, -79.222),
    ("Moss Park", 43.655, -79.366),
    ("Rouge", 43.821, -79.186),
    ("South Riverdale", 43.649, -79.338),
    ("Waterfront Communities-The Island", 43.633, -79.382),
    ("West Humber-Clairville", 43.716, -79.596),
    ("Woburn", 43.770, -79.228),
    ("York University Heights", 43.765, -79.488),
    ("Yorkdale-Glen Park", 43.714, -79.457),
];

/// Centroid for `label`, when the table knows it.
pub fn coordinates(label: &str) -> Option<(Latitude, Longitude)> {
    CENTROIDS
        .binary_search_by(|entry| entry.0.cmp(label))
        .ok()
        .map(|idx| (CENTROIDS[idx].1, CENTROIDS[idx].2))
}

/// Centroid for `label`, or the fixed city-center fallback.
pub fn coordinates_or_fallback(label: &str) -> (Latitude, Longitude) {
    coordinates(label).unwrap_or((FALLBACK_LATITUDE, FALLBACK_LONGITUDE))
}
