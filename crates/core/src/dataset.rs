// crates/core/src/dataset.rs
//! In-memory tabular dataset with CSV read/write.
//!
//! Every cell is text: the CSV reader hands back strings regardless of what
//! the column originally held, which is exactly the coercion the classifier
//! wants. Row order is meaningful and preserved through every operation.

use std::io::Read;

use crate::error::DatasetError;

/// An ordered table: one header row plus zero or more data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from pre-built headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse a dataset from CSV bytes (UTF-8, comma-separated).
    ///
    /// The first record is the header row. Rows whose field count differs
    /// from the header surface as a `Csv` error, as does invalid UTF-8.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, DatasetError> {
        Self::from_csv_reader(bytes)
    }

    /// Parse a dataset from any CSV reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new().from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(DatasetError::MissingHeader);
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Serialize the dataset as UTF-8 CSV bytes, header row first.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, DatasetError> {
        let mut buf = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);
            wtr.write_record(&self.headers)?;
            for row in &self.rows {
                wtr.write_record(row)?;
            }
            wtr.flush().map_err(csv::Error::from)?;
        }
        Ok(buf)
    }

    /// Find the index of a column by exact, case-sensitive name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Return a new dataset with one column appended.
    ///
    /// `values` must hold exactly one entry per data row.
    pub fn with_column(&self, name: &str, values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), self.rows.len());

        let mut headers = self.headers.clone();
        headers.push(name.to_string());

        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect();

        Self { headers, rows }
    }
}
