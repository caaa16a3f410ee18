//! Per-category spending totals and shares for a date range.

use std::collections::HashMap;

use serde::Serialize;

use crate::{category::Category, range::DateRange, transaction::Transaction};

/// The total spent in one category and its share of all spending in the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    /// The category the transactions were grouped by.
    pub category: Category,
    /// The sum of the amounts in the category.
    pub total: f64,
    /// `total` as a percentage of the sum over all categories, 0 if that sum is 0.
    pub percentage: f64,
}

/// Headline numbers for a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// The sum of all amounts in the range.
    pub grand_total: f64,
    /// How many transactions fell in the range.
    pub transaction_count: usize,
    /// The category with the largest total, `None` if nothing was spent.
    pub top_category: Option<Category>,
}

/// Group the transactions dated inside `date_range` by category.
///
/// Both ends of the range are included. Transactions outside it are ignored.
pub fn aggregate_by_category(
    transactions: &[Transaction],
    date_range: DateRange,
) -> HashMap<Category, CategoryBucket> {
    let mut totals: HashMap<Category, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| date_range.contains(transaction.date))
    {
        *totals.entry(transaction.category).or_default() += transaction.amount;
    }

    let grand_total: f64 = totals.values().sum();

    totals
        .into_iter()
        .map(|(category, total)| {
            let bucket = CategoryBucket {
                category,
                total,
                percentage: percent_of(total, grand_total),
            };

            (category, bucket)
        })
        .collect()
}

/// The buckets ordered by descending total, ties broken by display label.
pub fn sorted_buckets(buckets: &HashMap<Category, CategoryBucket>) -> Vec<CategoryBucket> {
    let mut sorted: Vec<CategoryBucket> = buckets.values().cloned().collect();

    sorted.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.display_label().cmp(b.category.display_label()))
    });

    sorted
}

/// Summarise the spending in `date_range`.
pub fn spending_summary(transactions: &[Transaction], date_range: DateRange) -> SpendingSummary {
    let buckets = aggregate_by_category(transactions, date_range);
    let transaction_count = transactions
        .iter()
        .filter(|transaction| date_range.contains(transaction.date))
        .count();
    let grand_total = buckets.values().map(|bucket| bucket.total).sum();
    let top_category = sorted_buckets(&buckets)
        .first()
        .filter(|bucket| bucket.total > 0.0)
        .map(|bucket| bucket.category);

    SpendingSummary {
        grand_total,
        transaction_count,
        top_category,
    }
}

fn percent_of(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        analytics::aggregation::{
            CategoryBucket, SpendingSummary, aggregate_by_category, sorted_buckets,
            spending_summary,
        },
        category::Category,
        range::DateRange,
        transaction::{
            ingest,
            test_utils::{raw_transaction, transaction},
        },
    };

    fn march() -> DateRange {
        DateRange::month_of(date!(2024 - 03 - 15))
    }

    #[test]
    fn groups_totals_and_percentages_by_category() {
        let transactions = [
            transaction("1", Category::Food, date!(2024 - 03 - 02), 50.0),
            transaction("2", Category::Food, date!(2024 - 03 - 10), 30.0),
            transaction("3", Category::Travel, date!(2024 - 03 - 20), 20.0),
        ];

        let buckets = aggregate_by_category(&transactions, march());

        assert_eq!(buckets.len(), 2);
        assert_eq!(
            buckets[&Category::Food],
            CategoryBucket {
                category: Category::Food,
                total: 80.0,
                percentage: 80.0
            }
        );
        assert_eq!(
            buckets[&Category::Travel],
            CategoryBucket {
                category: Category::Travel,
                total: 20.0,
                percentage: 20.0
            }
        );
    }

    #[test]
    fn differently_cased_keys_share_one_bucket() {
        let records = vec![
            raw_transaction("1", Some("Food"), Some("2024-03-02"), Some(10.0)),
            raw_transaction("2", Some("food"), Some("2024-03-03"), Some(20.0)),
            raw_transaction("3", Some(" FOOD "), Some("2024-03-04"), Some(30.0)),
            raw_transaction("4", Some("travel"), Some("2024-03-05"), Some(40.0)),
        ];

        let ingested = ingest(records);
        let buckets = aggregate_by_category(&ingested.accepted, march());

        assert!(ingested.rejected.is_empty());
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&Category::Food].total, 60.0);
        assert!((buckets[&Category::Food].percentage - 60.0).abs() < 1e-9);
        assert_eq!(buckets[&Category::Food].category.display_label(), "Food");
        assert_eq!(buckets[&Category::Travel].total, 40.0);
    }

    #[test]
    fn empty_input_gives_no_buckets() {
        assert!(aggregate_by_category(&[], march()).is_empty());
    }

    #[test]
    fn includes_both_ends_of_range() {
        let transactions = [
            transaction("1", Category::Food, date!(2024 - 02 - 29), 1.0),
            transaction("2", Category::Food, date!(2024 - 03 - 01), 2.0),
            transaction("3", Category::Food, date!(2024 - 03 - 31), 3.0),
            transaction("4", Category::Food, date!(2024 - 04 - 01), 4.0),
        ];

        let buckets = aggregate_by_category(&transactions, march());

        assert_eq!(buckets[&Category::Food].total, 5.0);
    }

    #[test]
    fn zero_grand_total_gives_zero_percentages() {
        let transactions = [
            transaction("1", Category::Food, date!(2024 - 03 - 02), 0.0),
            transaction("2", Category::Travel, date!(2024 - 03 - 03), 0.0),
        ];

        let buckets = aggregate_by_category(&transactions, march());

        assert_eq!(buckets.len(), 2);
        for bucket in buckets.values() {
            assert_eq!(bucket.percentage, 0.0);
        }
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let transactions = [
            transaction("1", Category::Food, date!(2024 - 03 - 02), 10.0),
            transaction("2", Category::Travel, date!(2024 - 03 - 03), 10.0),
            transaction("3", Category::Housing, date!(2024 - 03 - 04), 10.0),
        ];

        let buckets = aggregate_by_category(&transactions, march());
        let sum: f64 = buckets.values().map(|bucket| bucket.percentage).sum();

        assert!((sum - 100.0).abs() < 1e-9, "got {sum}");
    }

    #[test]
    fn sorts_by_total_then_label() {
        let transactions = [
            transaction("1", Category::Travel, date!(2024 - 03 - 02), 10.0),
            transaction("2", Category::Food, date!(2024 - 03 - 03), 10.0),
            transaction("3", Category::Housing, date!(2024 - 03 - 04), 30.0),
        ];

        let sorted = sorted_buckets(&aggregate_by_category(&transactions, march()));
        let categories: Vec<Category> = sorted.iter().map(|bucket| bucket.category).collect();

        assert_eq!(
            categories,
            [Category::Housing, Category::Food, Category::Travel]
        );
    }

    #[test]
    fn summary_reports_top_category() {
        let transactions = [
            transaction("1", Category::Food, date!(2024 - 03 - 02), 50.0),
            transaction("2", Category::Food, date!(2024 - 03 - 10), 30.0),
            transaction("3", Category::Travel, date!(2024 - 03 - 20), 20.0),
            transaction("4", Category::Travel, date!(2024 - 04 - 20), 500.0),
        ];

        let summary = spending_summary(&transactions, march());

        assert_eq!(
            summary,
            SpendingSummary {
                grand_total: 100.0,
                transaction_count: 3,
                top_category: Some(Category::Food),
            }
        );
    }

    #[test]
    fn summary_of_nothing_has_no_top_category() {
        let summary = spending_summary(&[], march());

        assert_eq!(summary.top_category, None);
        assert_eq!(summary.transaction_count, 0);
        assert_eq!(summary.grand_total, 0.0);
    }
}
