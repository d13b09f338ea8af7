mod defaults;

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{Alert, Category, Expense, UserData, SCHEMA_VERSION};
use crate::persist::{SqliteStore, StateStore};
use crate::suggest::{StaticSuggestions, SuggestionProvider};

/// Holds the session's [`UserData`] and applies mutations to it.
///
/// Each mutation validates, updates the aggregate in full (no
/// partial-update visibility), refreshes the alert set, and writes through
/// to the persistence adapter. If the write fails the error is returned but
/// the in-memory state keeps the already-applied mutation; the caller can
/// retry by triggering another mutation or surface the failure.
///
/// Mutators return the resulting snapshot by reference, which doubles as
/// the completion signal the presentation layer acts on (re-render,
/// navigate back to the dashboard).
pub struct BudgetStore {
    data: Option<UserData>,
    persist: Box<dyn StateStore>,
    suggestions: Box<dyn SuggestionProvider>,
}

impl BudgetStore {
    /// Open a store over the given persistence adapter, restoring a prior
    /// session if one was saved.
    pub fn new(mut persist: Box<dyn StateStore>) -> Result<Self> {
        let data = persist.load()?;
        if data.is_some() {
            log::info!("restored existing budget session");
        }
        Ok(Self {
            data,
            persist,
            suggestions: Box::new(StaticSuggestions),
        })
    }

    /// Open a store backed by SQLite at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let path = crate::persist::default_db_path()?;
        Self::new(Box::new(SqliteStore::open(&path)?))
    }

    /// Swap in a different suggestion source (the default is the static
    /// fixture set).
    pub fn with_suggestions(mut self, provider: Box<dyn SuggestionProvider>) -> Self {
        self.suggestions = provider;
        self
    }

    // ── Read accessors ────────────────────────────────────────

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    pub fn data(&self) -> Option<&UserData> {
        self.data.as_ref()
    }

    fn current(&self) -> Result<&UserData> {
        self.data.as_ref().ok_or(Error::NotInitialized)
    }

    // ── Mutations ─────────────────────────────────────────────

    /// Start a fresh session from the onboarding inputs: the default
    /// category set with zero spent, no expenses, no alerts.
    pub fn initialize(&mut self, monthly_income: Decimal, total_budget: Decimal) -> Result<&UserData> {
        let categories = defaults::DEFAULT_CATEGORIES
            .iter()
            .map(|&(name, limit, color)| {
                Category::new(name.to_string(), Decimal::from(limit), color.to_string())
            })
            .collect();

        self.data = Some(UserData {
            schema_version: SCHEMA_VERSION,
            monthly_income,
            total_budget,
            spent: Decimal::ZERO,
            categories,
            expenses: Vec::new(),
            alerts: Vec::new(),
            ai_suggestions: self.suggestions.suggestions(),
            badges: defaults::DEFAULT_BADGES.iter().map(|b| b.to_string()).collect(),
            savings_goal: Decimal::from(defaults::DEFAULT_SAVINGS_GOAL),
            current_savings: Decimal::ZERO,
        });

        log::info!("initialized budget session (budget {total_budget}, income {monthly_income})");
        self.save()?;
        self.current()
    }

    /// Record a new expense: prepend it, add its amount to the matching
    /// category and the grand total, refresh alerts.
    pub fn add_expense(&mut self, expense: Expense) -> Result<&UserData> {
        let data = self.data.as_mut().ok_or(Error::NotInitialized)?;
        validate_expense(data, &expense)?;

        if let Some(cat) = data.category_mut(&expense.category) {
            cat.spent += expense.amount;
        }
        data.spent += expense.amount;
        log::debug!("added expense of {} to {}", expense.amount, expense.category);
        data.expenses.insert(0, expense);
        refresh_alerts(data);

        self.save()?;
        self.current()
    }

    /// Replace the expense at `index`, moving its amount between categories
    /// if the category changed and adjusting the grand total by the
    /// difference.
    pub fn update_expense(&mut self, index: usize, expense: Expense) -> Result<&UserData> {
        let data = self.data.as_mut().ok_or(Error::NotInitialized)?;
        let len = data.expenses.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        validate_expense(data, &expense)?;

        let old = data.expenses[index].clone();
        let diff = expense.amount - old.amount;

        if old.category == expense.category {
            if let Some(cat) = data.category_mut(&old.category) {
                cat.spent += diff;
            }
        } else {
            if let Some(cat) = data.category_mut(&old.category) {
                cat.spent -= old.amount;
            }
            if let Some(cat) = data.category_mut(&expense.category) {
                cat.spent += expense.amount;
            }
        }
        data.spent += diff;
        log::debug!("updated expense {index}: {} -> {}", old.amount, expense.amount);
        data.expenses[index] = expense;
        refresh_alerts(data);

        self.save()?;
        self.current()
    }

    /// Remove the expense at `index`, subtracting its amount from its
    /// category and the grand total.
    pub fn delete_expense(&mut self, index: usize) -> Result<&UserData> {
        let data = self.data.as_mut().ok_or(Error::NotInitialized)?;
        let len = data.expenses.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let removed = data.expenses.remove(index);
        if let Some(cat) = data.category_mut(&removed.category) {
            cat.spent -= removed.amount;
        }
        data.spent -= removed.amount;
        log::debug!("deleted expense of {} from {}", removed.amount, removed.category);
        refresh_alerts(data);

        self.save()?;
        self.current()
    }

    /// Replace the total budget and the full category set verbatim (the
    /// caller supplies the complete next set, e.g. after editing limits).
    /// `spent` fields are carried over as given; only alerts are refreshed
    /// against the new limits.
    pub fn update_budget(&mut self, total_budget: Decimal, categories: Vec<Category>) -> Result<&UserData> {
        let data = self.data.as_mut().ok_or(Error::NotInitialized)?;
        data.total_budget = total_budget;
        data.categories = categories;
        refresh_alerts(data);

        self.save()?;
        self.current()
    }

    /// Replace the monthly income only.
    pub fn update_income(&mut self, income: Decimal) -> Result<&UserData> {
        let data = self.data.as_mut().ok_or(Error::NotInitialized)?;
        data.monthly_income = income;

        self.save()?;
        self.current()
    }

    /// Clear the session and the persisted slot; the store returns to the
    /// uninitialized state (used on logout).
    pub fn reset(&mut self) -> Result<()> {
        self.data = None;
        self.persist.clear()?;
        log::info!("budget session reset");
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        if let Some(data) = &self.data {
            self.persist.save(data)?;
        }
        Ok(())
    }
}

/// Input validation applied before any state changes: amounts must be
/// positive and the category reference must resolve.
fn validate_expense(data: &UserData, expense: &Expense) -> Result<()> {
    if expense.amount <= Decimal::ZERO {
        return Err(Error::NonPositiveAmount(expense.amount));
    }
    if data.category(&expense.category).is_none() {
        return Err(Error::UnknownCategory(expense.category.clone()));
    }
    Ok(())
}

/// Recompute the alert set from scratch: exactly one alert per category
/// currently over its limit. Alerts retract automatically once spending
/// drops back under budget.
fn refresh_alerts(data: &mut UserData) {
    data.alerts = data
        .categories
        .iter()
        .filter(|c| c.is_over_budget())
        .map(Alert::over_budget)
        .collect();
}
