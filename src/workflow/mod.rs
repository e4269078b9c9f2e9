pub mod steps;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::db::SubmissionStore;
use crate::models::SubmissionRecord;

use steps::StepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Start,
    PersistRecord,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub execution_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl ExecutionContext {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            execution_id: Uuid::now_v7(),
            started_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Execution {
    pub execution_id: Uuid,
    pub status: ExecutionStatus,
    pub history: Vec<WorkflowState>,
    pub output: Option<SubmissionRecord>,
    pub error: Option<String>,
}

impl Execution {
    pub fn succeeded(&self) -> bool {
        self.status == ExecutionStatus::Succeeded
    }
}

pub struct SubmissionWorkflow {
    name: String,
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionWorkflow {
    pub fn new(name: impl Into<String>, store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    /// Failures are captured in the returned `Execution`, never propagated.
    pub async fn execute(&self, ctx: &ExecutionContext, input: &Value) -> Execution {
        let mut history = vec![WorkflowState::Start];
        tracing::debug!("{} {}: entered Start", self.name, ctx.execution_id);

        let record = match steps::start(input) {
            Ok(record) => record,
            Err(e) => return self.fail(ctx, history, None, e),
        };

        history.push(WorkflowState::PersistRecord);
        tracing::debug!(
            "{} {}: entered PersistRecord for {}",
            self.name,
            ctx.execution_id,
            record.email
        );

        if let Err(e) = steps::persist_record(self.store.as_ref(), &record).await {
            return self.fail(ctx, history, Some(record), e);
        }

        history.push(WorkflowState::End);
        let elapsed_ms = (Utc::now() - ctx.started_at).num_milliseconds();
        tracing::info!(
            "{} {} succeeded in {elapsed_ms}ms",
            self.name,
            ctx.execution_id
        );

        Execution {
            execution_id: ctx.execution_id,
            status: ExecutionStatus::Succeeded,
            history,
            output: Some(record),
            error: None,
        }
    }

    fn fail(
        &self,
        ctx: &ExecutionContext,
        history: Vec<WorkflowState>,
        record: Option<SubmissionRecord>,
        err: StepError,
    ) -> Execution {
        let state = history.last().copied().unwrap_or(WorkflowState::Start);
        tracing::error!(
            "{} {} failed in {state:?}: {err}",
            self.name,
            ctx.execution_id
        );
        Execution {
            execution_id: ctx.execution_id,
            status: ExecutionStatus::Failed,
            history,
            output: record,
            error: Some(err.to_string()),
        }
    }
}
