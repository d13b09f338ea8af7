//! Pure derived-view calculators over the current [`UserData`].
//!
//! Recomputed on every call, never cached, never mutating. Percentage
//! helpers return 0 instead of dividing by zero so progress bars have a
//! defined value on an empty budget or limit.

use rust_decimal::Decimal;

use crate::models::{Category, UserData};

/// One slice of the category-distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub value: Decimal,
    pub fill: String,
}

/// Share of the total budget already spent, in percent. 0 when the total
/// budget is zero.
pub fn percent_spent(data: &UserData) -> Decimal {
    if data.total_budget.is_zero() {
        return Decimal::ZERO;
    }
    data.spent / data.total_budget * Decimal::ONE_HUNDRED
}

pub fn remaining_budget(data: &UserData) -> Decimal {
    data.total_budget - data.spent
}

/// Raw per-category percentage spent; may exceed 100 when over budget.
/// 0 when the limit is zero.
pub fn category_percent(category: &Category) -> Decimal {
    if category.limit.is_zero() {
        return Decimal::ZERO;
    }
    category.spent / category.limit * Decimal::ONE_HUNDRED
}

/// [`category_percent`] clamped to `[0, 100]` for progress-bar display.
/// Over-budget detection stays on [`Category::is_over_budget`].
pub fn category_progress(category: &Category) -> Decimal {
    category_percent(category).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Chart-ready spending distribution: categories with anything spent,
/// projected to name/value/fill.
pub fn category_breakdown(data: &UserData) -> Vec<ChartSlice> {
    data.categories
        .iter()
        .filter(|c| c.spent > Decimal::ZERO)
        .map(|c| ChartSlice {
            name: c.name.clone(),
            value: c.spent,
            fill: c.color.clone(),
        })
        .collect()
}

pub fn total_category_limits(data: &UserData) -> Decimal {
    data.categories.iter().map(|c| c.limit).sum()
}

/// True when the per-category limits add up to more than the total budget.
pub fn is_over_allocated(data: &UserData) -> bool {
    total_category_limits(data) > data.total_budget
}

/// Progress toward the savings goal, in percent. 0 when no goal is set.
pub fn savings_progress(data: &UserData) -> Decimal {
    if data.savings_goal.is_zero() {
        return Decimal::ZERO;
    }
    data.current_savings / data.savings_goal * Decimal::ONE_HUNDRED
}
