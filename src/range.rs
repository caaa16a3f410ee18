//! Inclusive date ranges for filtering transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, util::days_in_year_month};

use crate::Error;

/// A range of calendar days where both `start` and `end` are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateBounds")]
pub struct DateRange {
    start: Date,
    end: Date,
}

/// The serialized form of a [DateRange], checked by [DateRange::new].
#[derive(Deserialize)]
struct DateBounds {
    start: Date,
    end: Date,
}

impl TryFrom<DateBounds> for DateRange {
    type Error = Error;

    fn try_from(bounds: DateBounds) -> Result<Self, Self::Error> {
        DateRange::new(bounds.start, bounds.end)
    }
}

impl DateRange {
    /// Create a date range covering `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidDateRange] if `start` comes after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, Error> {
        if start > end {
            Err(Error::InvalidDateRange { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// The calendar month that contains `anchor`, from the first to the last day.
    pub fn month_of(anchor: Date) -> Self {
        let start = anchor - Duration::days(i64::from(anchor.day()) - 1);
        let month_length = days_in_year_month(anchor.year(), anchor.month());
        let end = start + Duration::days(i64::from(month_length) - 1);

        Self { start, end }
    }

    /// The first day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether `date` falls inside the range, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, range::DateRange};

    #[test]
    fn new_rejects_reversed_range() {
        let got = DateRange::new(date!(2024 - 03 - 02), date!(2024 - 03 - 01));

        assert_eq!(
            got,
            Err(Error::InvalidDateRange {
                start: date!(2024 - 03 - 02),
                end: date!(2024 - 03 - 01),
            })
        );
    }

    #[test]
    fn deserializing_rejects_reversed_range() {
        let json = serde_json::json!({
            "start": date!(2024 - 04 - 09),
            "end": date!(2024 - 01 - 01),
        });

        assert!(serde_json::from_value::<DateRange>(json).is_err());
    }

    #[test]
    fn serialized_range_reads_back_unchanged() {
        let range = DateRange::month_of(date!(2024 - 03 - 15));

        let json = serde_json::to_string(&range).unwrap();

        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), range);
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date!(2024 - 03 - 01), date!(2024 - 03 - 01)).unwrap();

        assert!(range.contains(date!(2024 - 03 - 01)));
    }

    #[test]
    fn contains_includes_both_bounds() {
        let range = DateRange::new(date!(2024 - 03 - 01), date!(2024 - 03 - 31)).unwrap();

        assert!(range.contains(date!(2024 - 03 - 01)));
        assert!(range.contains(date!(2024 - 03 - 15)));
        assert!(range.contains(date!(2024 - 03 - 31)));
        assert!(!range.contains(date!(2024 - 02 - 29)));
        assert!(!range.contains(date!(2024 - 04 - 01)));
    }

    #[test]
    fn month_of_covers_whole_month() {
        let range = DateRange::month_of(date!(2024 - 02 - 17));

        assert_eq!(range.start(), date!(2024 - 02 - 01));
        assert_eq!(range.end(), date!(2024 - 02 - 29));
    }

    #[test]
    fn month_of_handles_month_boundaries() {
        assert_eq!(
            DateRange::month_of(date!(2023 - 12 - 31)),
            DateRange::new(date!(2023 - 12 - 01), date!(2023 - 12 - 31)).unwrap()
        );
        assert_eq!(
            DateRange::month_of(date!(2023 - 02 - 01)).end(),
            date!(2023 - 02 - 28)
        );
    }
}
