//! ECharts options for the category views.
//!
//! The options are built with `charming` and handed to the presentation layer
//! as JSON (`Chart::to_string`), which does the actual drawing.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, JsFunction, Tooltip, Trigger,
    },
    series::{Line, Pie},
};

use crate::analytics::{aggregation::CategoryBucket, series::TimeSeriesPoint};

/// A line chart of one category's transactions over time.
///
/// Values on the y-axis and in the tooltip are formatted in `currency_code`.
pub fn category_line_chart(points: &[TimeSeriesPoint], currency_code: &str) -> Chart {
    let labels: Vec<String> = points.iter().map(|point| point.label.clone()).collect();
    let values: Vec<f64> = points.iter().map(|point| point.amount).collect();

    Chart::new()
        .title(Title::new().text("Spending over time"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter(currency_code))
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter(currency_code))),
        )
        .series(Line::new().name("Amount").smooth(true).data(values))
}

/// A pie chart of each category's share of the total.
///
/// Each slice takes the color of its category. Pass buckets from
/// [crate::sorted_buckets] to get the slices in descending order.
pub fn category_share_chart(buckets: &[CategoryBucket]) -> Chart {
    let data: Vec<(f64, &str)> = buckets
        .iter()
        .map(|bucket| (bucket.total, bucket.category.display_label()))
        .collect();
    let colors: Vec<Color> = buckets
        .iter()
        .map(|bucket| Color::from(bucket.category.color()))
        .collect();

    Chart::new()
        .color(colors)
        .title(Title::new().text("Spending by category"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().left("right").top("middle"))
        .series(
            Pie::new()
                .name("Categories")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

fn currency_formatter(currency_code: &str) -> JsFunction {
    JsFunction::new_with_args(
        "number",
        &format!(
            "const currencyFormatter = new Intl.NumberFormat('en-US', {{
              style: 'currency',
              currency: '{currency_code}'
            }});
            return (number) ? currencyFormatter.format(number) : \"-\";"
        ),
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        analytics::{
            aggregation::CategoryBucket,
            charts::{category_line_chart, category_share_chart},
            series::TimeSeriesPoint,
        },
        category::Category,
    };

    #[test]
    fn line_chart_uses_point_labels_and_currency() {
        let points = [
            TimeSeriesPoint {
                label: "1.3.2024".to_owned(),
                amount: 12.0,
            },
            TimeSeriesPoint {
                label: "5.3.2024".to_owned(),
                amount: 8.5,
            },
        ];

        let options = category_line_chart(&points, "EUR").to_string();

        assert!(options.contains("1.3.2024"), "{options}");
        assert!(options.contains("5.3.2024"), "{options}");
        assert!(options.contains("EUR"), "{options}");
    }

    #[test]
    fn share_chart_names_slices_by_category() {
        let buckets = [
            CategoryBucket {
                category: Category::Food,
                total: 80.0,
                percentage: 80.0,
            },
            CategoryBucket {
                category: Category::Travel,
                total: 20.0,
                percentage: 20.0,
            },
        ];

        let options = category_share_chart(&buckets).to_string();

        assert!(options.contains("Food"), "{options}");
        assert!(options.contains("Travel"), "{options}");
        assert!(options.contains(Category::Food.color()), "{options}");
    }
}
