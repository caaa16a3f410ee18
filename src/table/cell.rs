//! Turns column values into display cells.

use std::fmt::Display;

use serde::Serialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    currency::CurrencyFormatter,
    table::column::{CellRenderer, FieldValue},
    transaction::TransactionId,
};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day] [month repr:long] [year]");

const ELLIPSIS: &str = "...";

/// One rendered cell of the table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    /// Text to show as is.
    Text {
        /// The rendered text.
        text: String,
    },
    /// An icon linking to a detail page.
    Link {
        /// The path of the detail page.
        target: String,
    },
}

impl Cell {
    fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text { text } => write!(f, "{text}"),
            Cell::Link { target } => write!(f, "{target}"),
        }
    }
}

/// Render `value` with `renderer`.
///
/// A missing value renders as empty text. A value that does not suit the
/// renderer, e.g. text given to [CellRenderer::FormattedDate], is shown as plain text.
pub(super) fn render_cell(
    renderer: CellRenderer,
    value: Option<FieldValue>,
    currency_code: &str,
    formatter: &dyn CurrencyFormatter,
) -> Cell {
    let Some(value) = value else {
        return Cell::text("");
    };

    match (renderer, value) {
        (CellRenderer::TruncatedText { max_length }, value) => {
            Cell::text(truncate(&plain_text(value), max_length))
        }
        (CellRenderer::FormattedDate, FieldValue::Date(date)) => Cell::text(format_date(date)),
        (CellRenderer::FormattedCurrency, FieldValue::Amount(amount)) => {
            Cell::text(formatter.format(currency_code, amount))
        }
        (CellRenderer::LinkIcon { kind }, FieldValue::Id(id)) => Cell::Link {
            target: kind.detail_path(&id),
        },
        (CellRenderer::LinkIcon { kind }, FieldValue::Text(id)) => Cell::Link {
            target: kind.detail_path(&TransactionId::new(&id)),
        },
        (renderer, value) => {
            if renderer != CellRenderer::PlainText {
                tracing::debug!("Rendering {value:?} as plain text instead of {renderer:?}");
            }
            Cell::text(plain_text(value))
        }
    }
}

fn plain_text(value: FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text,
        FieldValue::Date(date) => date.to_string(),
        FieldValue::Amount(amount) => amount.to_string(),
        FieldValue::Id(id) => id.to_string(),
    }
}

/// Cut `text` to `max_length` graphemes and append ellipses if it is longer.
fn truncate(text: &str, max_length: usize) -> String {
    if text.graphemes(true).count() <= max_length {
        return text.to_owned();
    }

    let truncated: String = text.graphemes(true).take(max_length).collect();

    truncated + ELLIPSIS
}

fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|error| {
        tracing::debug!("Could not format {date}: {error}");
        date.to_string()
    })
}
