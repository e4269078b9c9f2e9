use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::SubmissionRecord;

use super::{KeySchema, StoreError, SubmissionStore};

pub struct MemorySubmissionStore {
    schema: KeySchema,
    /// (email, sort_key) -> record
    rows: DashMap<(String, i64), SubmissionRecord>,
}

impl MemorySubmissionStore {
    pub fn new(schema: KeySchema) -> Self {
        Self {
            schema,
            rows: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn put(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        let sort_key = self.schema.sort_key(record)?;
        self.rows.insert((record.email.clone(), sort_key), record.clone());
        Ok(())
    }

    async fn get(
        &self,
        email: &str,
        created: Option<i64>,
    ) -> Result<Option<SubmissionRecord>, StoreError> {
        let sort_key = self.schema.lookup_key(created)?;
        Ok(self
            .rows
            .get(&(email.to_string(), sort_key))
            .map(|row| row.value().clone()))
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<SubmissionRecord>, StoreError> {
        let mut rows: Vec<(i64, SubmissionRecord)> = self
            .rows
            .iter()
            .filter(|entry| entry.key().0 == email)
            .map(|entry| (entry.key().1, entry.value().clone()))
            .collect();
        rows.sort_by_key(|(sort_key, record)| (record.created, *sort_key));
        Ok(rows.into_iter().map(|(_, record)| record).collect())
    }
}
