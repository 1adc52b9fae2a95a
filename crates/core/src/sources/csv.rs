use std::path::Path;

use tracing::debug;

use crate::errors::CoreError;
use crate::models::holding::RawRow;
use crate::sources::traits::RowSource;

/// CSV-backed row source.
///
/// Broker statements often carry a preamble (account info, report
/// title) before the real header row; `skip_rows` says how many
/// records to discard before treating the next one as the header.
/// Remaining records become `RawRow`s keyed by those headers; missing
/// trailing cells become blank strings.
#[derive(Debug)]
pub struct CsvRowSource {
    name: String,
    data: Vec<u8>,
    skip_rows: usize,
}

impl CsvRowSource {
    /// Build a source from in-memory CSV bytes (e.g. a frontend upload).
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            skip_rows: 0,
        }
    }

    /// Build a source by reading a CSV file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "portfolio.csv".to_string());
        Ok(Self::from_bytes(name, data))
    }

    /// Skip `n` preamble records before the header row.
    #[must_use]
    pub fn with_skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }
}

impl RowSource for CsvRowSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn rows(&mut self) -> Result<Vec<RawRow>, CoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(self.data.as_slice());

        let mut records = reader.records();
        for _ in 0..self.skip_rows {
            if let Some(record) = records.next() {
                record?;
            }
        }

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|cell| cell.trim().to_string()).collect(),
            None => {
                return Err(CoreError::ImportSource(format!(
                    "'{}' has no header row after skipping {} record(s)",
                    self.name, self.skip_rows
                )))
            }
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            let row: RawRow = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let cell = record.get(i).unwrap_or("").to_string();
                    (header.clone(), cell)
                })
                .collect();
            rows.push(row);
        }

        debug!(source = %self.name, rows = rows.len(), "read csv source");
        Ok(rows)
    }
}
