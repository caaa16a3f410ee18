//! The transactions table.
//!
//! A [ColumnModel] describes what each column shows and how, and [materialize]
//! applies it to one page of transactions.

mod cell;
mod column;
mod engine;

pub use cell::Cell;
pub use column::{Accessor, CellRenderer, ColumnDefinition, ColumnModel, FieldValue, TableConfig};
pub use engine::{RenderedTable, materialize};
