/// Constants used by indicator-column parsing and label cleanup.
pub mod labeling {
    /// Header prefix marking one-hot neighborhood indicator columns.
    ///
    /// A matching header is `NEIGHBOURHOOD_<code>_<Display Name>` where
    /// `<code>` is one or more ASCII digits and the display name may carry
    /// a trailing parenthesized numeric suffix, e.g.
    /// `NEIGHBOURHOOD_07_Downtown (123)`.
    pub const INDICATOR_PREFIX: &str = "NEIGHBOURHOOD_";
}

/// Constants used by the aggregation and ranking engine.
pub mod ranking {
    /// Number of top-ranked neighborhoods retained in a report.
    pub const TOP_N: usize = 20;
    /// Number of leading ranks flagged as highlighted (the red split).
    pub const HIGHLIGHT_COUNT: usize = 5;
    /// Smallest map marker radius, in meters.
    pub const MIN_RADIUS: f64 = 200.0;
    /// Largest map marker radius, in meters.
    pub const MAX_RADIUS: f64 = 800.0;
    /// Alpha channel applied to interpolated marker colors.
    pub const MARKER_ALPHA: u8 = 160;
}

/// Constants used by the static coordinate lookup.
pub mod geo {
    /// Fallback latitude (Toronto city center) for unrecognized labels.
    pub const FALLBACK_LATITUDE: f64 = 43.65107;
    /// Fallback longitude (Toronto city center) for unrecognized labels.
    pub const FALLBACK_LONGITUDE: f64 = -79.347015;
}

/// Default artifact file names resolved relative to an artifact directory.
pub mod artifacts {
    /// Serialized severity model artifact.
    pub const MODEL_FILENAME: &str = "severity_model.json";
    /// Ordered feature-column schema artifact.
    pub const FEATURES_FILENAME: &str = "feature_columns.json";
    /// Processed numeric accident dataset.
    pub const DATASET_FILENAME: &str = "processed_accidents.csv";
}
