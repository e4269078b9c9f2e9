pub mod memory;
pub mod submissions;

use async_trait::async_trait;

use crate::models::SubmissionRecord;

pub use memory::MemorySubmissionStore;
pub use submissions::PgSubmissionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySchema {
    /// Partition key `email` only. A later submission overwrites the earlier one.
    Email,
    /// Partition key `email`, sort key `created`. Submissions coexist per email.
    EmailCreated,
}

impl KeySchema {
    pub fn sort_key(&self, record: &SubmissionRecord) -> Result<i64, StoreError> {
        if record.email.trim().is_empty() {
            return Err(StoreError::EmptyEmail);
        }
        match self {
            KeySchema::Email => Ok(0),
            KeySchema::EmailCreated => record.created.ok_or(StoreError::MissingSortKey),
        }
    }

    fn lookup_key(&self, created: Option<i64>) -> Result<i64, StoreError> {
        match self {
            KeySchema::Email => Ok(0),
            KeySchema::EmailCreated => created.ok_or(StoreError::MissingSortKey),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    EmptyEmail,
    MissingSortKey,
    Database(sqlx::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::EmptyEmail => write!(f, "email must not be empty"),
            StoreError::MissingSortKey => write!(f, "created is required by the table's sort key"),
            StoreError::Database(err) => write!(f, "database error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// The storage table. Writes are insert-or-overwrite on the full key.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn put(&self, record: &SubmissionRecord) -> Result<(), StoreError>;

    async fn get(
        &self,
        email: &str,
        created: Option<i64>,
    ) -> Result<Option<SubmissionRecord>, StoreError>;

    async fn list_by_email(&self, email: &str) -> Result<Vec<SubmissionRecord>, StoreError>;
}
