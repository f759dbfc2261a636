use thiserror::Error;
use uuid::Uuid;

/// Unified error type for core and storage layers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("client name must not be empty")]
    EmptyClientName,
    #[error("client `{0}` already exists")]
    DuplicateClientName(String),
    #[error("client not found: {0}")]
    ClientNotFound(Uuid),
    #[error("order not found: {0}")]
    OrderNotFound(Uuid),
    #[error("expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("no orders recorded for `{client}` in {month}")]
    NoData { client: String, month: String },
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
