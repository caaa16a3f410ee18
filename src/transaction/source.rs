//! The seam between the engines and whatever fetches transactions.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    context::ViewContext,
    pagination::{PageCount, Pagination},
    range::DateRange,
    transaction::record::{OwnerId, RawTransaction},
};

/// The parameters one page of transactions was fetched with.
///
/// Keep the request next to the response so a response that arrives after
/// the user has moved on can be recognised with [PageRequest::is_current] and
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Whose transactions to fetch.
    pub owner_id: OwnerId,
    /// Only transactions dated inside this range.
    pub date_range: DateRange,
    /// The zero-based page to fetch.
    pub page_index: u64,
    /// The number of transactions per page.
    pub page_size: u64,
}

impl PageRequest {
    /// The request for the page `pagination` points at in `context`.
    pub fn new(context: &ViewContext, pagination: &Pagination) -> Self {
        Self {
            owner_id: context.owner_id.clone(),
            date_range: context.date_range,
            page_index: pagination.page_index(),
            page_size: pagination.page_size(),
        }
    }

    /// Whether this request still matches what the user is looking at.
    pub fn is_current(&self, context: &ViewContext, pagination: &Pagination) -> bool {
        *self == Self::new(context, pagination)
    }
}

/// One page of records and the page count reported with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The request this page answers.
    pub request: PageRequest,
    /// The records on the page, oldest first.
    pub records: Vec<RawTransaction>,
    /// The total number of pages for the request's owner and date range.
    pub page_count: PageCount,
}

/// Fetches transaction records for the table and analytics views.
///
/// Implementations must return records in ascending date order, the time
/// series relies on it. Failures to reach the data are reported as errors
/// here, before any data gets to the engines.
pub trait TransactionSource {
    /// Fetch the page of records described by `request`.
    fn fetch_page(&self, request: &PageRequest) -> Result<Page, Error>;

    /// Fetch every record of `owner_id` inside `date_range`.
    fn fetch_range(
        &self,
        owner_id: &OwnerId,
        date_range: DateRange,
    ) -> Result<Vec<RawTransaction>, Error>;
}

/// A [TransactionSource] over records held in memory, e.g. read from a CSV file.
///
/// Records without a readable date are passed through after the dated ones so
/// that validation can report them.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawTransaction>,
}

impl MemorySource {
    /// Create a source over `records`.
    pub fn new(records: Vec<RawTransaction>) -> Self {
        Self { records }
    }

    /// The records of `owner_id` inside `date_range`, oldest first.
    fn select(&self, owner_id: &OwnerId, date_range: DateRange) -> Vec<RawTransaction> {
        let mut selected: Vec<(Option<Date>, &RawTransaction)> = self
            .records
            .iter()
            .filter(|record| record.owner_id == owner_id.as_ref())
            .map(|record| (record.parsed_date(), record))
            .filter(|(date, _)| date.is_none_or(|date| date_range.contains(date)))
            .collect();

        // Stable sort so records on the same day keep their order.
        selected.sort_by_key(|(date, _)| (date.is_none(), *date));

        selected
            .into_iter()
            .map(|(_, record)| record.clone())
            .collect()
    }
}

impl TransactionSource for MemorySource {
    fn fetch_page(&self, request: &PageRequest) -> Result<Page, Error> {
        if request.page_size == 0 {
            return Err(Error::InvalidPageSize(request.page_size));
        }

        let selected = self.select(&request.owner_id, request.date_range);
        let page_count = (selected.len() as u64).div_ceil(request.page_size);

        let offset = request
            .page_index
            .checked_mul(request.page_size)
            .and_then(|offset| usize::try_from(offset).ok());
        let records = match offset {
            Some(offset) => selected
                .into_iter()
                .skip(offset)
                .take(usize::try_from(request.page_size).unwrap_or(usize::MAX))
                .collect(),
            None => {
                tracing::debug!(
                    "Page {} of size {} is past any record, returning an empty page",
                    request.page_index,
                    request.page_size
                );
                Vec::new()
            }
        };

        Ok(Page {
            request: request.clone(),
            records,
            page_count: PageCount::Known(page_count),
        })
    }

    fn fetch_range(
        &self,
        owner_id: &OwnerId,
        date_range: DateRange,
    ) -> Result<Vec<RawTransaction>, Error> {
        Ok(self.select(owner_id, date_range))
    }
}
