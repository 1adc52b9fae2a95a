use thiserror::Error;

/// Unified error type for the entire portfolio-lens-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Data-quality problems inside an import (blank cells, unparseable
/// numbers, footer rows) are NOT errors — the normalizer degrades them
/// to zeros or drops the row. Only an unreadable source or a column
/// mapping that matches nothing is a hard failure.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Import ──────────────────────────────────────────────────────
    #[error("Import source error: {0}")]
    ImportSource(String),

    #[error("Column mapping failed: {0}")]
    ColumnMapping(String),

    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::ImportSource(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
