use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Alert, Category, Expense};

/// Version stamp written into every persisted document. Documents saved
/// before the field existed deserialize with a default of 1.
pub const SCHEMA_VERSION: u32 = 1;

fn schema_version_default() -> u32 {
    SCHEMA_VERSION
}

/// The root aggregate for one budget session; the unit of persistence.
///
/// Field names serialize in camelCase to match the historical on-disk
/// document shape. Invariants maintained by the store:
/// - `spent` equals the sum of `amount` over all `expenses`;
/// - each category's `spent` equals the sum over expenses tagged with it;
/// - `alerts` holds exactly one entry per category currently over budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default = "schema_version_default")]
    pub schema_version: u32,
    pub monthly_income: Decimal,
    pub total_budget: Decimal,
    pub spent: Decimal,
    pub categories: Vec<Category>,
    /// Newest-first by construction: the store prepends on add.
    pub expenses: Vec<Expense>,
    pub alerts: Vec<Alert>,
    pub ai_suggestions: Vec<String>,
    pub badges: Vec<String>,
    pub savings_goal: Decimal,
    pub current_savings: Decimal,
}

impl UserData {
    pub fn category(&self, name: &str) -> Option<&Category> {
        Category::find_by_name(&self.categories, name)
    }

    pub(crate) fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }
}
