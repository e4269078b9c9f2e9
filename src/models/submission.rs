use serde::Serialize;

/// One row per form submission. `created` doubles as the sort key when the
/// table has one.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_reference: Option<String>,
}

impl SubmissionRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            created: None,
            dietary_requirements: None,
            ticket_reference: None,
        }
    }

    pub fn with_created(mut self, created: i64) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_dietary_requirements(mut self, value: impl Into<String>) -> Self {
        self.dietary_requirements = Some(value.into());
        self
    }

    pub fn with_ticket_reference(mut self, value: impl Into<String>) -> Self {
        self.ticket_reference = Some(value.into());
        self
    }
}
