use time::Date;

use crate::{
    category::Category,
    transaction::{RawTransaction, Transaction},
};

/// A raw record owned by "user-1" with the title "Lunch".
pub fn raw_transaction(
    id: &str,
    category: Option<&str>,
    date: Option<&str>,
    amount: Option<f64>,
) -> RawTransaction {
    RawTransaction {
        id: id.to_owned(),
        title: Some("Lunch".to_owned()),
        category: category.map(str::to_owned),
        date: date.map(str::to_owned),
        amount,
        owner_id: "user-1".to_owned(),
    }
}

/// A valid transaction owned by "user-1".
#[track_caller]
pub fn transaction(id: &str, category: Category, date: Date, amount: f64) -> Transaction {
    Transaction::build(amount, date, "Lunch")
        .id(id)
        .category(category)
        .owner_id("user-1")
        .finalize()
        .unwrap()
}
