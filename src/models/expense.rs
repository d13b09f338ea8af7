use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded expense.
///
/// `category` references a [`Category`](super::Category) by name;
/// `category_color` is a denormalized copy of that category's display tag,
/// captured at entry time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub amount: Decimal,
    pub category: String,
    pub category_color: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub notes: String,
}

impl Expense {
    pub fn new(
        amount: Decimal,
        category: String,
        category_color: String,
        date: String,
        notes: String,
    ) -> Self {
        Self {
            amount,
            category,
            category_color,
            date,
            notes,
        }
    }

    /// Convenience constructor dating the expense today (local time).
    pub fn today(amount: Decimal, category: String, category_color: String, notes: String) -> Self {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self::new(amount, category, category_color, date, notes)
    }
}
