//! Turns the transactions of one category into points for a line chart.

use serde::Serialize;
use time::Date;

use crate::{category::Category, transaction::Transaction};

/// One point of a category's spending over time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    /// The date of the transaction written as day.month.year, e.g. "5.3.2024".
    pub label: String,
    /// The amount of the transaction.
    pub amount: f64,
}

/// Write `date` as day.month.year without leading zeros, e.g. "5.3.2024".
pub fn format_point_label(date: Date) -> String {
    format!("{}.{}.{}", date.day(), u8::from(date.month()), date.year())
}

/// The transactions in `category` as points, in the order they were given.
///
/// Callers are expected to pass transactions sorted by ascending date.
pub fn project(transactions: &[Transaction], category: Category) -> Vec<TimeSeriesPoint> {
    transactions
        .iter()
        .filter(|transaction| transaction.category == category)
        .map(|transaction| TimeSeriesPoint {
            label: format_point_label(transaction.date),
            amount: transaction.amount,
        })
        .collect()
}
