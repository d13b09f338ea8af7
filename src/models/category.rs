use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spending category with a monthly limit.
///
/// `name` is the category's identifier within the set; expenses reference
/// it by name. `spent` is maintained by the store as a running sum of the
/// amounts of all expenses currently tagged with this category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub color: String,
}

impl Category {
    pub fn new(name: String, limit: Decimal, color: String) -> Self {
        Self {
            name,
            limit,
            spent: Decimal::ZERO,
            color,
        }
    }

    /// Over-budget detection uses the unclamped comparison.
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Amount spent beyond the limit; zero when at or under budget.
    pub fn overspend(&self) -> Decimal {
        if self.is_over_budget() {
            self.spent - self.limit
        } else {
            Decimal::ZERO
        }
    }

    /// Find a category by name in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.name == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
