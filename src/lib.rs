//! Expense Insights turns transaction records into paginated tables and
//! per-category spending analytics.
//!
//! The crate is split into two halves:
//! - the list view, where one page of transactions is rendered through a
//!   declarative [ColumnModel] by [materialize] while [Pagination] tracks the
//!   page the caller is looking at;
//! - the analytics view, where [aggregate_by_category] buckets a date-bounded
//!   collection by [Category] and [project] builds the time series for one
//!   category.
//!
//! Fetching transactions is left to an implementation of [TransactionSource].

#![warn(missing_docs)]

use time::Date;

mod analytics;
mod category;
mod config;
mod context;
mod currency;
mod logging;
mod pagination;
mod range;
mod table;
mod timezone;
mod transaction;

pub use analytics::{
    CategoryBucket, SpendingSummary, TimeSeriesPoint, aggregate_by_category,
    category_line_chart, category_share_chart, format_point_label, project, sorted_buckets,
    spending_summary,
};
pub use category::Category;
pub use config::Config;
pub use context::{TransactionKind, ViewContext};
pub use currency::{CurrencyFormatter, NumfmtCurrencyFormatter};
pub use logging::setup_logging;
pub use pagination::{
    PageCount, PageSummary, Pagination, PaginationConfig, PaginationIndicator,
    create_pagination_indicators,
};
pub use range::DateRange;
pub use table::{
    Cell, CellRenderer, ColumnDefinition, ColumnModel, FieldValue, RenderedTable, TableConfig,
    materialize,
};
pub use timezone::{get_local_offset, today_in_timezone};
pub use transaction::{
    Ingested, MemorySource, OwnerId, Page, PageRequest, RawTransaction, RejectedRecord,
    Transaction, TransactionBuilder, TransactionId, TransactionSource, ingest,
    read_transactions_csv,
};

/// The errors that may occur in the library.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction record did not contain a required field.
    ///
    /// The record is excluded from the batch, the remaining records are
    /// still processed.
    #[error("the record is missing the \"{0}\" field")]
    MissingField(&'static str),

    /// The date of a transaction record could not be parsed.
    ///
    /// Accepted formats are `YYYY-MM-DD` and RFC 3339 timestamps.
    #[error("could not parse the date \"{0}\"")]
    InvalidDate(String),

    /// The amount of a transaction record was negative, NaN or infinite.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// A page size of zero was requested.
    #[error("the page size must be greater than zero, got {0}")]
    InvalidPageSize(u64),

    /// A date range where the start comes after the end.
    #[error("the date range start {start} is after its end {end}")]
    InvalidDateRange {
        /// The first day of the range.
        start: Date,
        /// The last day of the range.
        end: Date,
    },

    /// The CSV had issues that prevented it from being read.
    #[error("could not read the CSV file: {0}")]
    InvalidCSV(String),

    /// The configuration file could not be parsed or holds invalid values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// A file could not be read.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not read file: {0}")]
    Io(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::InvalidCSV(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}
