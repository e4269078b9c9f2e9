use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::SubmissionRecord;

use super::{KeySchema, StoreError, SubmissionStore};

const SELECT_COLUMNS: &str =
    "SELECT email, created, dietary_requirements, ticket_reference FROM submissions";

pub struct PgSubmissionStore {
    pool: PgPool,
    schema: KeySchema,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool, schema: KeySchema) -> Self {
        Self { pool, schema }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn put(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        let sort_key = self.schema.sort_key(record)?;
        sqlx::query(
            "INSERT INTO submissions (email, sort_key, created, dietary_requirements, ticket_reference)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (email, sort_key) DO UPDATE SET
                created = EXCLUDED.created,
                dietary_requirements = EXCLUDED.dietary_requirements,
                ticket_reference = EXCLUDED.ticket_reference",
        )
        .bind(&record.email)
        .bind(sort_key)
        .bind(record.created)
        .bind(&record.dietary_requirements)
        .bind(&record.ticket_reference)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(
        &self,
        email: &str,
        created: Option<i64>,
    ) -> Result<Option<SubmissionRecord>, StoreError> {
        let sort_key = self.schema.lookup_key(created)?;
        let record = sqlx::query_as::<_, SubmissionRecord>(&format!(
            "{SELECT_COLUMNS} WHERE email = $1 AND sort_key = $2"
        ))
        .bind(email)
        .bind(sort_key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<SubmissionRecord>, StoreError> {
        let records = sqlx::query_as::<_, SubmissionRecord>(&format!(
            "{SELECT_COLUMNS} WHERE email = $1 ORDER BY created ASC NULLS FIRST, sort_key ASC"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
