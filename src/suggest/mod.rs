//! Savings-tip source. The displayed suggestions are fixture data, not
//! computed; the trait keeps the store decoupled so a real engine can be
//! substituted later without touching it.

pub trait SuggestionProvider {
    fn suggestions(&self) -> Vec<String>;
}

/// The canned tip set seeded into new sessions.
pub struct StaticSuggestions;

impl SuggestionProvider for StaticSuggestions {
    fn suggestions(&self) -> Vec<String> {
        [
            "You spent 30% more on food this month compared to last month.",
            "Consider setting aside part of your remaining budget for emergency savings.",
            "You're doing great with Travel - 25% under budget!",
            "Try meal prepping to cut your monthly food spending.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests;
