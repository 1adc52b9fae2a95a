use crate::errors::CoreError;
use crate::models::holding::RawRow;

/// Trait abstraction for import sources.
///
/// A source's only job is turning some external artifact (CSV file,
/// pasted text, a frontend's parsed spreadsheet) into raw rows. The
/// pipeline never touches file formats itself — if a new source format
/// shows up, only a new implementation of this trait is needed.
pub trait RowSource {
    /// The original file/source name (with extension) — used to name
    /// export files after the source.
    fn name(&self) -> &str;

    /// Produce the raw rows. A source that cannot be read at all
    /// returns an error; data-quality problems inside individual rows
    /// are left for the normalizer to absorb.
    fn rows(&mut self) -> Result<Vec<RawRow>, CoreError>;
}
