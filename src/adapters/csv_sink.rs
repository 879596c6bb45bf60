use crate::domain::model::Tabular;
use crate::utils::error::{EtlError, Result};

/// Serializes rows as CSV with a leading zero-based index column whose header is empty.
pub fn to_indexed_csv<T: Tabular>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(std::iter::once("").chain(T::COLUMNS.iter().copied()))?;
    for (idx, row) in rows.iter().enumerate() {
        writer.write_record(std::iter::once(idx.to_string()).chain(row.cells()))?;
    }

    writer.into_inner().map_err(|e| EtlError::IoError(e.into_error()))
}
