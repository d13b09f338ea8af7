use rust_decimal::Decimal;
use thiserror::Error;

/// Everything that can go wrong in the store or at the persistence boundary.
///
/// Mutation preconditions (`NotInitialized`, `IndexOutOfRange`) and input
/// validation (`NonPositiveAmount`, `UnknownCategory`) fail before any state
/// changes. Persistence failures (`Serialization`, `Storage`, `Io`) are
/// raised after the in-memory mutation succeeded; the session stays valid
/// and the caller may retry the write.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no budget session is active; call initialize first")]
    NotInitialized,

    #[error("expense index {index} is out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("failed to serialize user data")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error")]
    Storage(#[from] rusqlite::Error),

    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("could not determine data directory")]
    DataDir,
}

pub type Result<T> = std::result::Result<T, Error>;
