//! Budgetbook - the core of a local-only student budget tracker.
//!
//! The crate owns the single session aggregate ([`UserData`]), applies
//! mutations to it through [`BudgetStore`], derives read-only views through
//! [`calc`], and writes the aggregate through a [`persist::StateStore`]
//! after every mutation. Presentation (screens, charts, toasts) lives
//! outside the crate and consumes this API.

pub mod calc;
pub mod error;
pub mod models;
pub mod persist;
pub mod store;
pub mod suggest;

pub use error::{Error, Result};
pub use models::{Alert, Category, Expense, UserData};
pub use store::BudgetStore;
