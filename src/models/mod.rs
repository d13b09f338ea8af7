mod alert;
mod category;
mod expense;
mod user_data;

pub use alert::Alert;
pub use category::Category;
pub use expense::Expense;
pub use user_data::{UserData, SCHEMA_VERSION};

#[cfg(test)]
mod tests;
