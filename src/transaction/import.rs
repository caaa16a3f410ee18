//! Reads transaction records from CSV exports.
//!
//! The header row must name the columns `id`, `title`, `category`, `date`,
//! `amount` and `owner_id`, in any order. Empty cells are read as missing values.

use std::io::Read;

use crate::{
    Error,
    transaction::record::{Ingested, RawTransaction, RejectedRecord},
};

/// Read raw transaction records from CSV text.
///
/// Rows that cannot be read, e.g. because the amount is not a number, are
/// logged and listed in [Ingested::rejected] while the remaining rows are still
/// read. Records are not validated here; pass [Ingested::accepted] on to
/// [crate::ingest] for that.
///
/// # Errors
///
/// Returns [Error::InvalidCSV] if the header row cannot be read or lacks one
/// of the `id` and `owner_id` columns.
pub fn read_transactions_csv(reader: impl Read) -> Result<Ingested<RawTransaction>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for required in ["id", "owner_id"] {
        if !headers.iter().any(|header| header == required) {
            return Err(Error::InvalidCSV(format!(
                "the header row is missing the \"{required}\" column"
            )));
        }
    }

    let mut records = Ingested::default();

    for (position, row) in reader.deserialize::<RawTransaction>().enumerate() {
        match row {
            Ok(record) => records.accepted.push(record),
            Err(error) => {
                tracing::warn!("Skipping CSV row {}: {error}", position + 1);
                records.rejected.push(RejectedRecord {
                    position,
                    id: None,
                    error: Error::InvalidCSV(error.to_string()),
                });
            }
        }
    }

    tracing::debug!(
        "Read {} transaction records from CSV, skipped {}",
        records.accepted.len(),
        records.rejected.len()
    );

    Ok(records)
}
