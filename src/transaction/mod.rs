//! Transaction records and where they come from.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of raw records
//! - Reading raw records from CSV exports
//! - The `TransactionSource` trait that supplies pages and date ranges of records

mod import;
mod record;
mod source;

#[cfg(test)]
pub mod test_utils;

pub use import::read_transactions_csv;
pub use record::{
    Ingested, OwnerId, RawTransaction, RejectedRecord, Transaction, TransactionBuilder,
    TransactionId, ingest,
};
pub use source::{MemorySource, Page, PageRequest, TransactionSource};
