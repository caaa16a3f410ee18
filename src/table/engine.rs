//! Builds the header and body of the transactions table for one page.

use serde::Serialize;

use crate::{
    context::ViewContext,
    currency::CurrencyFormatter,
    pagination::{PageSummary, Pagination},
    table::{
        cell::{Cell, render_cell},
        column::ColumnModel,
    },
    transaction::Transaction,
};

/// A table ready to be drawn by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    /// One label per column.
    pub header: Vec<String>,
    /// One row per transaction with one cell per column.
    pub body: Vec<Vec<Cell>>,
    /// The "Page X of Y" line.
    pub summary: PageSummary,
    /// Whether the back buttons are enabled.
    pub can_previous_page: bool,
    /// Whether the next buttons are enabled.
    pub can_next_page: bool,
}

/// Render one page of transactions through `columns`.
///
/// `rows` must already be the page that `pagination` points at, no further
/// slicing is done here. Amounts are handed to `formatter` together with the
/// currency code of `context`.
pub fn materialize(
    rows: &[Transaction],
    columns: &ColumnModel,
    pagination: &Pagination,
    context: &ViewContext,
    formatter: &dyn CurrencyFormatter,
) -> RenderedTable {
    let body = rows
        .iter()
        .map(|row| {
            columns
                .columns()
                .iter()
                .map(|column| {
                    render_cell(
                        column.renderer,
                        (column.accessor)(row),
                        &context.currency_code,
                        formatter,
                    )
                })
                .collect()
        })
        .collect();

    RenderedTable {
        header: columns.headers(),
        body,
        summary: pagination.summary(),
        can_previous_page: pagination.can_previous_page(),
        can_next_page: pagination.can_next_page(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::Category,
        context::{TransactionKind, ViewContext},
        currency::NumfmtCurrencyFormatter,
        pagination::{PageCount, PageSummary, Pagination},
        range::DateRange,
        table::{
            cell::Cell,
            column::{CellRenderer, ColumnDefinition, ColumnModel, TableConfig},
            engine::materialize,
        },
        transaction::{OwnerId, Transaction, test_utils::transaction},
    };

    fn context() -> ViewContext {
        ViewContext::new(
            OwnerId::new("user-1"),
            "USD",
            DateRange::month_of(date!(2024 - 03 - 01)),
        )
    }

    fn text(text: &str) -> Cell {
        Cell::Text {
            text: text.to_owned(),
        }
    }

    #[test]
    fn renders_standard_columns() {
        let rows = [transaction(
            "t1",
            Category::Food,
            date!(2024 - 03 - 05),
            12.5,
        )];
        let columns = ColumnModel::transactions(TransactionKind::Expense, &TableConfig::default());
        let pagination = Pagination::new(10).unwrap();

        let table = materialize(
            &rows,
            &columns,
            &pagination,
            &context(),
            &NumfmtCurrencyFormatter,
        );

        assert_eq!(table.header, ["Link", "Title", "Category", "Date", "Total"]);
        assert_eq!(
            table.body,
            vec![vec![
                Cell::Link {
                    target: "/expenses/t1".to_owned()
                },
                text("Lunch"),
                text("Food"),
                text("05 March 2024"),
                text("$12.50"),
            ]]
        );
    }

    #[test]
    fn long_titles_are_truncated_without_changing_the_row() {
        let title = "x".repeat(61);
        let rows = [Transaction::build(1.0, date!(2024 - 03 - 05), &title)
            .id("t1")
            .finalize()
            .unwrap()];
        let columns = ColumnModel::transactions(TransactionKind::Expense, &TableConfig::default());

        let table = materialize(
            &rows,
            &columns,
            &Pagination::new(10).unwrap(),
            &context(),
            &NumfmtCurrencyFormatter,
        );

        assert_eq!(table.body[0][1].to_string().chars().count(), 63);
        assert_eq!(rows[0].title, title);
    }

    #[test]
    fn keeps_column_order_and_fills_missing_values() {
        let rows = [
            transaction("t1", Category::Food, date!(2024 - 03 - 01), 1.0),
            transaction("t2", Category::Travel, date!(2024 - 03 - 02), 2.0),
        ];
        let columns = ColumnModel::new()
            .with_column(ColumnDefinition::new(
                "missing",
                "Notes",
                CellRenderer::PlainText,
                |_| None,
            ))
            .with_column(ColumnDefinition::new(
                "category",
                "Category",
                CellRenderer::PlainText,
                |transaction| {
                    Some(crate::table::FieldValue::Text(
                        transaction.category.to_string(),
                    ))
                },
            ));

        let table = materialize(
            &rows,
            &columns,
            &Pagination::new(10).unwrap(),
            &context(),
            &NumfmtCurrencyFormatter,
        );

        assert_eq!(table.header, ["Notes", "Category"]);
        assert_eq!(
            table.body,
            vec![
                vec![text(""), text("Food")],
                vec![text(""), text("Travel")]
            ]
        );
    }

    #[test]
    fn does_not_slice_rows() {
        let rows: Vec<Transaction> = (0..25)
            .map(|i| transaction(&i.to_string(), Category::Food, date!(2024 - 03 - 01), 1.0))
            .collect();
        let columns = ColumnModel::transactions(TransactionKind::Expense, &TableConfig::default());
        let pagination = Pagination::new(10)
            .unwrap()
            .set_page_count(PageCount::Known(3))
            .set_page_index(2);

        let table = materialize(
            &rows,
            &columns,
            &pagination,
            &context(),
            &NumfmtCurrencyFormatter,
        );

        assert_eq!(table.body.len(), 25);
    }

    #[test]
    fn reports_pagination_state() {
        let pagination = Pagination::new(10)
            .unwrap()
            .set_page_count(PageCount::Known(3))
            .set_page_index(5);
        let columns = ColumnModel::transactions(TransactionKind::Expense, &TableConfig::default());

        let table = materialize(
            &[],
            &columns,
            &pagination,
            &context(),
            &NumfmtCurrencyFormatter,
        );

        assert!(table.body.is_empty());
        assert_eq!(
            table.summary,
            PageSummary {
                current_page_display: 3,
                total_pages: Some(3)
            }
        );
        assert!(table.can_previous_page);
        assert!(!table.can_next_page);
    }
}
