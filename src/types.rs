/// Human-readable neighborhood label reconstructed from one-hot columns.
/// Examples: `Downtown`, `Agincourt South-Malvern West`
pub type NeighborhoodLabel = String;
/// Dataset column name as it appears in the CSV header row.
/// Examples: `NEIGHBOURHOOD_07_Downtown (123)`, `SPEEDING`, `VISIBILITY`
pub type ColumnName = String;
/// Severe-accident probability on the percent scale.
/// Example: `37.25`
pub type Probability = f64;
/// Latitude in decimal degrees.
/// Example: `43.65107`
pub type Latitude = f64;
/// Longitude in decimal degrees.
/// Example: `-79.347015`
pub type Longitude = f64;
/// RGBA channels for a map marker color.
/// Example: `[255, 0, 0, 160]`
pub type RgbaColor = [u8; 4];
