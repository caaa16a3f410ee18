//! This modules defines the state and navigation rules for paging through
//! transactions that are fetched one page at a time.
//!
//! [Pagination] is a small `Copy` value. Every navigation method returns the
//! next state and leaves refetching to the caller.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// The number of transactions per page when the user has not picked one.
    pub default_page_size: u64,
    /// The page sizes offered to the user.
    pub page_size_options: Vec<u64>,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_indicator_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 20, 30, 40, 50],
            max_indicator_pages: 5,
        }
    }
}

/// The number of pages reported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageCount {
    /// The source reported how many pages there are.
    Known(u64),
    /// The source has not said, so there may always be a next page.
    Unknown,
}

impl PageCount {
    /// The page count, if known.
    pub fn known(self) -> Option<u64> {
        match self {
            PageCount::Known(count) => Some(count),
            PageCount::Unknown => None,
        }
    }
}

/// Which page of transactions is shown and how many rows a page holds.
///
/// Invariant: when the page count is known, `page_index < page_count`, or
/// `page_index == 0` if there are no pages at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PaginationState")]
pub struct Pagination {
    page_index: u64,
    page_size: u64,
    page_count: PageCount,
}

/// A [Pagination] as read from outside, before its page size is checked and
/// its index is clamped.
#[derive(Deserialize)]
struct PaginationState {
    page_index: u64,
    page_size: u64,
    page_count: PageCount,
}

impl TryFrom<PaginationState> for Pagination {
    type Error = Error;

    fn try_from(state: PaginationState) -> Result<Self, Self::Error> {
        // Same upper bound as `set_page_index` so page numbers stay in range.
        let pagination = Self {
            page_index: state.page_index.min(i64::MAX as u64),
            ..Self::new(state.page_size)?
        };

        Ok(pagination.set_page_count(state.page_count))
    }
}

impl Pagination {
    /// Start on the first page with an unknown page count.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPageSize] if `page_size` is zero.
    pub fn new(page_size: u64) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }

        Ok(Self {
            page_index: 0,
            page_size,
            page_count: PageCount::Unknown,
        })
    }

    /// Start on the first page using the configured default page size.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPageSize] if the default page size is zero.
    pub fn from_config(config: &PaginationConfig) -> Result<Self, Error> {
        Self::new(config.default_page_size)
    }

    /// The zero-based index of the current page.
    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    /// The number of rows per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// The page count reported with the latest page.
    pub fn page_count(&self) -> PageCount {
        self.page_count
    }

    /// Whether there is a page before the current one.
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Whether there is a page after the current one.
    ///
    /// Always true while the page count is unknown.
    pub fn can_next_page(&self) -> bool {
        match self.page_count {
            PageCount::Known(count) => self.page_index < count.saturating_sub(1),
            PageCount::Unknown => true,
        }
    }

    /// Go to the page at `index`.
    ///
    /// With a known page count the index is clamped to the existing pages.
    /// With an unknown page count a negative index is ignored and any other
    /// index is accepted as is.
    #[must_use]
    pub fn set_page_index(self, index: i64) -> Self {
        let page_index = match (self.page_count, u64::try_from(index)) {
            (PageCount::Known(count), Ok(index)) => index.min(count.saturating_sub(1)),
            (PageCount::Known(_), Err(_)) => 0,
            (PageCount::Unknown, Ok(index)) => index,
            (PageCount::Unknown, Err(_)) => {
                tracing::debug!("Ignoring negative page index {index}");
                return self;
            }
        };

        Self { page_index, ..self }
    }

    /// Go to the next page, if there is one.
    #[must_use]
    pub fn next_page(self) -> Self {
        if !self.can_next_page() {
            tracing::debug!("Already on the last page ({})", self.page_index);
            return self;
        }

        Self {
            page_index: self.page_index + 1,
            ..self
        }
    }

    /// Go to the previous page, if there is one.
    #[must_use]
    pub fn previous_page(self) -> Self {
        if !self.can_previous_page() {
            return self;
        }

        Self {
            page_index: self.page_index - 1,
            ..self
        }
    }

    /// Go to the first page.
    #[must_use]
    pub fn first_page(self) -> Self {
        if !self.can_previous_page() {
            return self;
        }

        Self {
            page_index: 0,
            ..self
        }
    }

    /// Go to the last page.
    ///
    /// Does nothing while the page count is unknown since there is no last page to go to.
    #[must_use]
    pub fn last_page(self) -> Self {
        match self.page_count {
            PageCount::Known(count) if self.can_next_page() => Self {
                page_index: count - 1,
                ..self
            },
            _ => self,
        }
    }

    /// Go to the page the user typed in, where pages are numbered from one.
    ///
    /// Empty or non-numeric input goes to the first page.
    #[must_use]
    pub fn set_page_from_input(self, input: &str) -> Self {
        let index = input
            .trim()
            .parse::<i64>()
            .map(|page_number| page_number.saturating_sub(1))
            .unwrap_or(0);

        self.set_page_index(index)
    }

    /// Change the number of rows per page and go back to the first page.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPageSize] if `page_size` is zero.
    pub fn set_page_size(self, page_size: u64) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }

        Ok(Self {
            page_index: 0,
            page_size,
            ..self
        })
    }

    /// Record the page count that came back with the latest page.
    ///
    /// The page index is pulled back onto the last page if it is now out of range.
    #[must_use]
    pub fn set_page_count(self, page_count: PageCount) -> Self {
        let page_index = match page_count {
            PageCount::Known(count) => self.page_index.min(count.saturating_sub(1)),
            PageCount::Unknown => self.page_index,
        };

        Self {
            page_index,
            page_count,
            ..self
        }
    }

    /// The one-based page number and the total number of pages, for display.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            current_page_display: self.page_index + 1,
            total_pages: self.page_count.known(),
        }
    }

    /// The page links to show around the current page.
    ///
    /// See [create_pagination_indicators]. With an unknown page count only the
    /// current page and the back and next buttons are shown.
    pub fn indicators(&self, max_pages: u64) -> Vec<PaginationIndicator> {
        let curr_page = self.page_index + 1;

        match self.page_count {
            PageCount::Known(count) => create_pagination_indicators(curr_page, count, max_pages),
            PageCount::Unknown => {
                let mut indicators = Vec::with_capacity(3);
                if curr_page > 1 {
                    indicators.push(PaginationIndicator::BackButton(curr_page - 1));
                }
                indicators.push(PaginationIndicator::CurrPage(curr_page));
                indicators.push(PaginationIndicator::NextButton(curr_page + 1));
                indicators
            }
        }
    }
}

/// The "Page X of Y" line under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// The current page, counting from one.
    pub current_page_display: u64,
    /// The number of pages, if the data source reported it.
    pub total_pages: Option<u64>,
}

impl Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.total_pages {
            Some(total_pages) => write!(f, "Page {} of {total_pages}", self.current_page_display),
            None => write!(f, "Page {} of ?", self.current_page_display),
        }
    }
}

/// One element of the page navigation bar. Page numbers count from one.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page being shown.
    CurrPage(u64),
    /// A gap in the page numbers.
    Ellipsis,
    /// A link to the page after the current one.
    NextButton(u64),
    /// A link to the page before the current one.
    BackButton(u64),
}

/// Build the page navigation bar for page `curr_page` of `page_count`.
///
/// At most `max_pages` page numbers are shown around the current page, with
/// the first and last page and ellipses added when the window skips pages.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let mut indicators: Vec<PaginationIndicator> = if page_count <= max_pages {
        (1..=page_count).map(map_page).collect()
    } else if curr_page <= (max_pages / 2) {
        (1..=max_pages).map(map_page).collect()
    } else if curr_page > (page_count - max_pages / 2) {
        ((page_count - max_pages + 1)..=page_count)
            .map(map_page)
            .collect()
    } else {
        ((curr_page - max_pages / 2)..=(curr_page + max_pages / 2))
            .map(map_page)
            .collect()
    };

    if page_count > max_pages {
        if curr_page > (max_pages / 2) + 1 {
            indicators.insert(0, PaginationIndicator::Page(1));
            indicators.insert(1, PaginationIndicator::Ellipsis);
        }

        if curr_page < (page_count - max_pages / 2) {
            indicators.push(PaginationIndicator::Ellipsis);
            indicators.push(PaginationIndicator::Page(page_count));
        }
    }

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
