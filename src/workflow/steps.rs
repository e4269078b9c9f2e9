use serde_json::{Value, json};

use crate::db::{StoreError, SubmissionStore};
use crate::models::SubmissionRecord;

#[derive(Debug)]
pub enum StepError {
    InvalidInput(String),
    Persist(StoreError),
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            StepError::Persist(err) => write!(f, "persist failed: {err}"),
        }
    }
}

impl From<StoreError> for StepError {
    fn from(err: StoreError) -> Self {
        StepError::Persist(err)
    }
}

pub fn envelope(body: Value, request_time_epoch: i64, path: &str) -> Value {
    json!({
        "body": body,
        "requestContext": {
            "requestTimeEpoch": request_time_epoch,
            "path": path,
        },
    })
}

/// `Start`: flatten the request envelope into the record's attributes.
pub fn start(envelope: &Value) -> Result<SubmissionRecord, StepError> {
    let body = envelope
        .get("body")
        .filter(|b| b.is_object())
        .ok_or_else(|| StepError::InvalidInput("missing request body".to_string()))?;

    let email = body
        .get("email")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StepError::InvalidInput("email is required".to_string()))?;

    let request_time = envelope["requestContext"]["requestTimeEpoch"].as_i64();
    let created = match body.get("created") {
        None | Some(Value::Null) => request_time,
        Some(value) => parse_timestamp(value).or_else(|| {
            tracing::debug!("Ignoring unparseable created {value} for {email}");
            request_time
        }),
    };

    let dietary_requirements = match body.get("dietaryRequirements") {
        Some(Value::Array(items)) => {
            let tags: Vec<&str> = items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            non_empty(&tags.join(", "))
        }
        Some(Value::String(s)) => non_empty(s),
        _ => None,
    };

    let ticket_reference = body
        .get("ticketRef")
        .or_else(|| body.get("ticketReference"))
        .and_then(|v| v.as_str())
        .and_then(non_empty);

    Ok(SubmissionRecord {
        email: email.to_string(),
        created,
        dietary_requirements,
        ticket_reference,
    })
}

pub async fn persist_record(
    store: &dyn SubmissionStore,
    record: &SubmissionRecord,
) -> Result<(), StepError> {
    store.put(record).await?;
    Ok(())
}

/// Unix seconds, as a JSON number or a numeric string.
fn parse_timestamp(value: &Value) -> Option<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.filter(|secs| *secs >= 0)
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
