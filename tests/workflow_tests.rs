mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::json;

use hackform::db::{KeySchema, MemorySubmissionStore, SubmissionStore};
use hackform::workflow::steps::{self, StepError};
use hackform::workflow::{
    ExecutionContext, ExecutionStatus, SubmissionWorkflow, WorkflowState,
};

fn memory_workflow(schema: KeySchema) -> (Arc<MemorySubmissionStore>, SubmissionWorkflow) {
    let store = Arc::new(MemorySubmissionStore::new(schema));
    let workflow = SubmissionWorkflow::new("test", store.clone());
    (store, workflow)
}

fn ctx() -> ExecutionContext {
    ExecutionContext::new(Utc.with_ymd_and_hms(2024, 10, 5, 9, 0, 0).unwrap())
}

// ── Start step ──────────────────────────────────────────────────

#[test]
fn start_flattens_body() {
    let envelope = steps::envelope(
        json!({
            "email": "  a@example.com ",
            "dietaryRequirements": "Vegan, Gluten Free",
            "ticketRef": "T-123",
            "created": 1_700_000_000,
        }),
        1_800_000_000,
        "/contact",
    );

    let record = steps::start(&envelope).unwrap();
    assert_eq!(record.email, "a@example.com");
    assert_eq!(record.created, Some(1_700_000_000));
    assert_eq!(record.dietary_requirements.as_deref(), Some("Vegan, Gluten Free"));
    assert_eq!(record.ticket_reference.as_deref(), Some("T-123"));
}

#[test]
fn start_defaults_created_to_request_time() {
    let envelope = steps::envelope(json!({ "email": "a@example.com" }), 1_800_000_000, "/contact");
    let record = steps::start(&envelope).unwrap();
    assert_eq!(record.created, Some(1_800_000_000));
    assert_eq!(record.dietary_requirements, None);
    assert_eq!(record.ticket_reference, None);
}

#[test]
fn start_accepts_string_created_and_tag_arrays() {
    let envelope = steps::envelope(
        json!({
            "email": "a@example.com",
            "created": "1700000000",
            "dietaryRequirements": ["Vegan", "", "Gluten Free"],
            "ticketReference": "T-7",
        }),
        0,
        "/contact",
    );
    let record = steps::start(&envelope).unwrap();
    assert_eq!(record.created, Some(1_700_000_000));
    assert_eq!(record.dietary_requirements.as_deref(), Some("Vegan, Gluten Free"));
    assert_eq!(record.ticket_reference.as_deref(), Some("T-7"));
}

#[test]
fn start_drops_empty_optional_fields() {
    let envelope = steps::envelope(
        json!({ "email": "a@example.com", "dietaryRequirements": "", "ticketRef": " " }),
        0,
        "/contact",
    );
    let record = steps::start(&envelope).unwrap();
    assert_eq!(record.dietary_requirements, None);
    assert_eq!(record.ticket_reference, None);
}

#[test]
fn start_rejects_missing_email() {
    let missing = steps::envelope(json!({ "email": "" }), 0, "/contact");
    assert!(matches!(steps::start(&missing), Err(StepError::InvalidInput(_))));

    assert!(steps::start(&json!({})).is_err());
}

#[test]
fn start_falls_back_to_request_time_for_bad_created() {
    for created in [json!("yesterday"), json!(-5), json!("1.7e9"), json!(true)] {
        let envelope = steps::envelope(
            json!({ "email": "a@example.com", "created": created }),
            1_800_000_000,
            "/contact",
        );
        let record = steps::start(&envelope).unwrap();
        assert_eq!(record.created, Some(1_800_000_000), "created = {created}");
    }
}

// ── Execution ───────────────────────────────────────────────────

#[tokio::test]
async fn execution_walks_every_state() {
    let (store, workflow) = memory_workflow(KeySchema::Email);
    let input = steps::envelope(json!({ "email": "a@example.com" }), 1_700_000_000, "/contact");

    let execution = workflow.execute(&ctx(), &input).await;
    assert_eq!(execution.status, ExecutionStatus::Succeeded);
    assert_eq!(
        execution.history,
        vec![WorkflowState::Start, WorkflowState::PersistRecord, WorkflowState::End]
    );
    assert!(execution.error.is_none());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn invalid_input_never_reaches_persist() {
    let (store, workflow) = memory_workflow(KeySchema::Email);
    let input = steps::envelope(json!({ "email": "" }), 0, "/contact");

    let execution = workflow.execute(&ctx(), &input).await;
    assert_eq!(execution.status, ExecutionStatus::Failed);
    assert_eq!(execution.history, vec![WorkflowState::Start]);
    assert!(execution.output.is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn persist_failure_fails_the_execution() {
    let workflow = SubmissionWorkflow::new("test", Arc::new(common::FailingStore));
    let input = steps::envelope(json!({ "email": "a@example.com" }), 0, "/contact");

    let execution = workflow.execute(&ctx(), &input).await;
    assert!(!execution.succeeded());
    assert_eq!(
        execution.history,
        vec![WorkflowState::Start, WorkflowState::PersistRecord]
    );
    assert!(execution.error.unwrap().contains("table offline"));
    assert_eq!(execution.output.unwrap().email, "a@example.com");
}

#[tokio::test]
async fn each_execution_gets_its_own_id() {
    let (_, workflow) = memory_workflow(KeySchema::Email);
    let input = steps::envelope(json!({ "email": "a@example.com" }), 0, "/contact");

    let first = workflow.execute(&ExecutionContext::new(Utc::now()), &input).await;
    let second = workflow.execute(&ExecutionContext::new(Utc::now()), &input).await;
    assert_ne!(first.execution_id, second.execution_id);
}

// ── Storage table ───────────────────────────────────────────────

#[tokio::test]
async fn store_rejects_empty_email_and_missing_sort_key() {
    use hackform::db::StoreError;
    use hackform::models::SubmissionRecord;

    let email_only = MemorySubmissionStore::new(KeySchema::Email);
    assert!(matches!(
        email_only.put(&SubmissionRecord::new("")).await,
        Err(StoreError::EmptyEmail)
    ));

    let sorted = MemorySubmissionStore::new(KeySchema::EmailCreated);
    assert!(matches!(
        sorted.put(&SubmissionRecord::new("a@example.com")).await,
        Err(StoreError::MissingSortKey)
    ));
    assert!(sorted.is_empty());
}

#[tokio::test]
async fn store_get_uses_the_sort_key_only_when_configured() {
    use hackform::models::SubmissionRecord;

    let email_only = MemorySubmissionStore::new(KeySchema::Email);
    email_only
        .put(&SubmissionRecord::new("a@example.com").with_created(10))
        .await
        .unwrap();
    assert!(email_only.get("a@example.com", Some(99)).await.unwrap().is_some());

    let sorted = MemorySubmissionStore::new(KeySchema::EmailCreated);
    sorted
        .put(&SubmissionRecord::new("a@example.com").with_created(10))
        .await
        .unwrap();
    assert!(sorted.get("a@example.com", Some(10)).await.unwrap().is_some());
    assert!(sorted.get("a@example.com", Some(11)).await.unwrap().is_none());
    assert!(sorted.get("a@example.com", None).await.is_err());
}
