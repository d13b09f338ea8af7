use serde::{Deserialize, Serialize};

use super::Category;

/// A threshold-exceeded notice shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    /// Build the alert for a category that is over its limit. The message
    /// always contains the category name; deduplication keys on that.
    pub fn over_budget(category: &Category) -> Self {
        Self {
            message: format!(
                "You've exceeded your {} budget by {}!",
                category.name,
                category.overspend()
            ),
        }
    }

    pub fn mentions(&self, category_name: &str) -> bool {
        self.message.contains(category_name)
    }
}
