//! Defines the transaction model and the validation of raw records.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{Error, category::Category};

mod date_format {
    //! Writes a [time::Date] the way [super::RawTransaction] reads it back.

    use serde::Serializer;
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    /// Date format for serialized transactions, e.g. "2024-03-05".
    const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date
            .format(DATE_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

// ============================================================================
// MODELS
// ============================================================================

/// The unique ID the data source gave a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a transaction ID.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ID of the user a transaction belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Create an owner ID.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense or income that passed validation.
///
/// To create a new `Transaction`, use [Transaction::build] or
/// [RawTransaction::validate].
///
/// Deserializing reads the fields of a [RawTransaction] and validates them, so
/// a negative amount or an unreadable date is rejected there as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub title: String,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction happened.
    #[serde(serialize_with = "date_format::serialize")]
    pub date: Date,
    /// The amount of money spent or earned, never negative.
    pub amount: f64,
    /// The user the transaction belongs to.
    pub owner_id: OwnerId,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: Date, title: &str) -> TransactionBuilder {
        TransactionBuilder {
            id: TransactionId::new(""),
            title: title.to_owned(),
            category: Category::Other,
            date,
            amount,
            owner_id: OwnerId::new(""),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The category defaults to [Category::Other] and the IDs default to empty
/// strings. Call [TransactionBuilder::finalize] to check the amount and get
/// the [Transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    id: TransactionId,
    title: String,
    category: Category,
    date: Date,
    amount: f64,
    owner_id: OwnerId,
}

impl TransactionBuilder {
    /// Set the ID for the transaction.
    pub fn id(mut self, id: &str) -> Self {
        self.id = TransactionId::new(id);
        self
    }

    /// Set the category for the transaction.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the owner of the transaction.
    pub fn owner_id(mut self, owner_id: &str) -> Self {
        self.owner_id = OwnerId::new(owner_id);
        self
    }

    /// Build the transaction.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if the amount is negative, NaN or infinite.
    pub fn finalize(self) -> Result<Transaction, Error> {
        Ok(Transaction {
            id: self.id,
            title: self.title,
            category: self.category,
            date: self.date,
            amount: validate_amount(self.amount)?,
            owner_id: self.owner_id,
        })
    }
}

/// A transaction record exactly as the data source delivered it.
///
/// Any field other than the IDs may be missing. Use [RawTransaction::validate]
/// or [ingest] to turn records into [Transaction]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    /// The ID of the transaction.
    #[serde(alias = "$id")]
    pub id: String,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub title: Option<String>,
    /// The category key, matched case-insensitively.
    #[serde(default)]
    pub category: Option<String>,
    /// The date as `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub date: Option<String>,
    /// The amount of money spent or earned.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The user the transaction belongs to.
    #[serde(alias = "userId", alias = "ownerId")]
    pub owner_id: String,
}

impl RawTransaction {
    /// The parsed date, if the record has a valid one.
    pub fn parsed_date(&self) -> Option<Date> {
        self.date.as_deref().and_then(|date| parse_date(date).ok())
    }

    /// Check the record and convert it into a [Transaction].
    ///
    /// A missing title becomes an empty string and an unknown category becomes
    /// [Category::Other].
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingField] if the date, category or amount is
    /// missing, [Error::InvalidDate] if the date cannot be parsed and
    /// [Error::InvalidAmount] if the amount is negative, NaN or infinite.
    pub fn validate(self) -> Result<Transaction, Error> {
        let date = match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => parse_date(date)?,
            _ => return Err(Error::MissingField("date")),
        };

        let category = match self.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => Category::resolve(category),
            _ => return Err(Error::MissingField("category")),
        };

        let amount = self.amount.ok_or(Error::MissingField("amount"))?;

        Ok(Transaction {
            id: TransactionId(self.id),
            title: self.title.unwrap_or_default(),
            category,
            date,
            amount: validate_amount(amount)?,
            owner_id: OwnerId(self.owner_id),
        })
    }
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = Error;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

/// A record that was left out of a batch, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// The zero-based position of the record in its batch.
    pub position: usize,
    /// The ID of the record, if it could be read.
    pub id: Option<String>,
    /// What was wrong with the record.
    pub error: Error,
}

/// The result of processing a batch of records where bad records are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<T> {
    /// The records that were accepted, in their original order.
    pub accepted: Vec<T>,
    /// The records that were left out.
    pub rejected: Vec<RejectedRecord>,
}

impl<T> Default for Ingested<T> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Validate a batch of raw records, keeping the valid ones in order.
///
/// A bad record never stops the rest of the batch from being processed, it is
/// logged and listed in [Ingested::rejected] instead.
pub fn ingest(records: impl IntoIterator<Item = RawTransaction>) -> Ingested<Transaction> {
    let mut ingested = Ingested::default();

    for (position, record) in records.into_iter().enumerate() {
        let id = record.id.clone();

        match record.validate() {
            Ok(transaction) => ingested.accepted.push(transaction),
            Err(error) => {
                tracing::warn!("Skipping transaction record {position} (id \"{id}\"): {error}");
                ingested.rejected.push(RejectedRecord {
                    position,
                    id: Some(id),
                    error,
                });
            }
        }
    }

    ingested
}

/// Parse a date written as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `text` is in neither format.
pub(crate) fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .or_else(|_| OffsetDateTime::parse(text, &Rfc3339).map(|date_time| date_time.date()))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount))
    }
}
