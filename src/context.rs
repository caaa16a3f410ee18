//! The explicit context that table and analytics calls run in.

use serde::{Deserialize, Serialize};

use crate::{
    range::DateRange,
    transaction::{OwnerId, TransactionId},
};

/// Who is looking, in which currency, over which days.
///
/// Passed into every call that needs it instead of being read from shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    /// The user whose transactions are shown.
    pub owner_id: OwnerId,
    /// The ISO 4217 code handed to the [crate::CurrencyFormatter].
    pub currency_code: String,
    /// The days covered by the current view.
    pub date_range: DateRange,
}

impl ViewContext {
    /// Create a context for `owner_id` over `date_range`.
    pub fn new(owner_id: OwnerId, currency_code: &str, date_range: DateRange) -> Self {
        Self {
            owner_id,
            currency_code: currency_code.to_owned(),
            date_range,
        }
    }
}

/// Whether a table lists money spent or money earned.
///
/// Decides where the detail link of each row points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent.
    #[default]
    Expense,
    /// Money earned.
    Income,
}

impl TransactionKind {
    /// The path of the detail page for the transaction `id`.
    pub fn detail_path(self, id: &TransactionId) -> String {
        match self {
            TransactionKind::Expense => format!("/expenses/{id}"),
            TransactionKind::Income => format!("/incomes/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{context::TransactionKind, transaction::TransactionId};

    #[test]
    fn detail_path_depends_on_kind() {
        let id = TransactionId::new("64f1c2");

        assert_eq!(TransactionKind::Expense.detail_path(&id), "/expenses/64f1c2");
        assert_eq!(TransactionKind::Income.detail_path(&id), "/incomes/64f1c2");
    }
}
