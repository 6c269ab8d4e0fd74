//! CSV-backed numeric dataset loading.
//!
//! The processed accident dataset is fully numeric: indicator columns hold
//! 0/1, feature columns hold encoded measurements. Cells are decoded to
//! `f64` up front so scoring and label reconstruction can index rows
//! positionally.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::PipelineError;
use crate::types::ColumnName;

/// In-memory tabular dataset: a header row plus numeric cells.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    headers: Vec<ColumnName>,
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Load a dataset from a CSV file.
    ///
    /// Blank cells decode as `0.0`. A non-numeric cell is a hard
    /// `Dataset` error; the processed dataset is produced by an upstream
    /// encoding job and mixed content means the wrong file was supplied.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Load a dataset from any CSV byte stream.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, PipelineError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<ColumnName> = csv_reader
            .headers()
            .map_err(|err| PipelineError::Dataset(err.to_string()))?
            .iter()
            .map(|name| name.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|err| PipelineError::Dataset(err.to_string()))?;
            let mut row = Vec::with_capacity(headers.len());
            for (col_idx, cell) in record.iter().enumerate() {
                let trimmed = cell.trim();
                if trimmed.is_empty() {
                    row.push(0.0);
                    continue;
                }
                let value: f64 = trimmed.parse().map_err(|_| {
                    PipelineError::Dataset(format!(
                        "row {} column '{}' is not numeric: '{}'",
                        row_idx + 2,
                        headers
                            .get(col_idx)
                            .map(String::as_str)
                            .unwrap_or("<unnamed>"),
                        trimmed
                    ))
                })?;
                row.push(value);
            }
            // Short rows pad with zeros so positional lookups stay in range.
            row.resize(headers.len(), 0.0);
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    /// Build an empty dataset that still advertises `headers`.
    ///
    /// Used as the graceful-degradation fallback when the dataset file is
    /// missing: downstream schema checks run against the expected columns
    /// while scoring sees zero rows.
    pub fn empty_with_headers(headers: Vec<ColumnName>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Header row, in file order.
    pub fn headers(&self) -> &[ColumnName] {
        &self.headers
    }

    /// Numeric rows, one `Vec<f64>` per record.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Position of `name` in the header row.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Whether every name in `names` appears in the header row.
    pub fn has_columns<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> bool {
        names
            .into_iter()
            .all(|name| self.column_index(name).is_some())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds zero records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_numeric_cells() {
        let csv = "SPEEDING,VISIBILITY\n1,0.5\n0,2\n";
        let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.headers(), &["SPEEDING", "VISIBILITY"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0], vec![1.0, 0.5]);
        assert_eq!(dataset.rows()[1], vec![0.0, 2.0]);
    }

    #[test]
    fn blank_cells_decode_as_zero() {
        let csv = "A,B\n,3\n";
        let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.rows()[0], vec![0.0, 3.0]);
    }

    #[test]
    fn short_rows_pad_to_header_width() {
        let csv = "A,B,C\n1,2\n";
        let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.rows()[0], vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn non_numeric_cell_is_an_error() {
        let csv = "A,B\n1,oops\n";
        let err = Dataset::from_csv_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("column 'B'"), "unexpected error: {message}");
        assert!(message.contains("oops"));
    }

    #[test]
    fn column_lookup_and_presence_checks() {
        let csv = "A,B\n1,2\n";
        let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.column_index("B"), Some(1));
        assert_eq!(dataset.column_index("Z"), None);
        assert!(dataset.has_columns(["A", "B"]));
        assert!(!dataset.has_columns(["A", "Z"]));
    }

    #[test]
    fn empty_with_headers_advertises_columns_without_rows() {
        let dataset = Dataset::empty_with_headers(vec!["A".into(), "B".into()]);
        assert!(dataset.is_empty());
        assert!(dataset.has_columns(["A", "B"]));
    }
}
