//! Category analytics over a date range.
//!
//! - **Aggregation**: totals and percentage shares per category
//! - **Series**: one category's transactions as labelled points over time
//! - **Charts**: ECharts options built from the two above

mod aggregation;
mod charts;
mod series;

pub use aggregation::{
    CategoryBucket, SpendingSummary, aggregate_by_category, sorted_buckets, spending_summary,
};
pub use charts::{category_line_chart, category_share_chart};
pub use series::{TimeSeriesPoint, format_point_label, project};
