//! Declarative column definitions for the transactions table.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    context::TransactionKind,
    transaction::{Transaction, TransactionId},
};

/// Cell rendering limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// The max number of graphemes to display in truncated text cells before
    /// cutting the text and appending ellipses.
    pub max_text_length: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_text_length: 60,
        }
    }
}

/// A value read out of a transaction by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, e.g. a title.
    Text(String),
    /// A calendar date.
    Date(Date),
    /// An amount of money.
    Amount(f64),
    /// The ID of the transaction, used for detail links.
    Id(TransactionId),
}

/// How the value of a column is turned into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// The value as is.
    PlainText,
    /// Text cut to `max_length` graphemes with "..." appended when it is longer.
    TruncatedText {
        /// The number of graphemes kept before the ellipses.
        max_length: usize,
    },
    /// A date written out as e.g. "05 March 2024".
    FormattedDate,
    /// An amount passed to the [crate::CurrencyFormatter].
    FormattedCurrency,
    /// A link to the detail page of the transaction.
    LinkIcon {
        /// Decides whether the link points to the expense or income page.
        kind: TransactionKind,
    },
}

/// Reads the value shown in a column from a transaction.
///
/// Returning `None` renders an empty cell.
pub type Accessor = fn(&Transaction) -> Option<FieldValue>;

/// One column of the table.
#[derive(Debug, Clone)]
pub struct ColumnDefinition {
    /// A unique name for the column.
    pub id: &'static str,
    /// The text in the header cell.
    pub header: String,
    /// Reads the cell value from a row.
    pub accessor: Accessor,
    /// Turns the value into a cell.
    pub renderer: CellRenderer,
}

impl ColumnDefinition {
    /// Create a column.
    pub fn new(id: &'static str, header: &str, renderer: CellRenderer, accessor: Accessor) -> Self {
        Self {
            id,
            header: header.to_owned(),
            accessor,
            renderer,
        }
    }
}

/// The ordered columns of a table.
#[derive(Debug, Clone, Default)]
pub struct ColumnModel {
    columns: Vec<ColumnDefinition>,
}

impl ColumnModel {
    /// Create a model with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `column` after the existing columns.
    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// The standard transactions table: link, title, category, date and total.
    pub fn transactions(kind: TransactionKind, config: &TableConfig) -> Self {
        Self::new()
            .with_column(ColumnDefinition::new(
                "id",
                "Link",
                CellRenderer::LinkIcon { kind },
                |transaction| Some(FieldValue::Id(transaction.id.clone())),
            ))
            .with_column(ColumnDefinition::new(
                "title",
                "Title",
                CellRenderer::TruncatedText {
                    max_length: config.max_text_length,
                },
                |transaction| Some(FieldValue::Text(transaction.title.clone())),
            ))
            .with_column(ColumnDefinition::new(
                "category",
                "Category",
                CellRenderer::PlainText,
                |transaction| {
                    Some(FieldValue::Text(
                        transaction.category.display_label().to_owned(),
                    ))
                },
            ))
            .with_column(ColumnDefinition::new(
                "date",
                "Date",
                CellRenderer::FormattedDate,
                |transaction| Some(FieldValue::Date(transaction.date)),
            ))
            .with_column(ColumnDefinition::new(
                "amount",
                "Total",
                CellRenderer::FormattedCurrency,
                |transaction| Some(FieldValue::Amount(transaction.amount)),
            ))
    }

    /// The columns in display order.
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// The header labels in display order.
    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.header.clone())
            .collect()
    }
}
