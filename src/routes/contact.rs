use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::parser;
use crate::widgets::EMPTY_EMAIL_MESSAGE;
use crate::workflow::ExecutionContext;
use crate::workflow::steps;

pub async fn submit(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let data = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let has_email = data["email"]
        .as_str()
        .is_some_and(|s| !s.trim().is_empty());
    if !has_email {
        return Err(AppError::BadRequest(EMPTY_EMAIL_MESSAGE.to_string()));
    }

    let ctx = ExecutionContext::new(Utc::now());
    let input = steps::envelope(data, ctx.started_at.timestamp(), uri.path());
    let execution = state.workflow.execute(&ctx, &input).await;

    if !execution.succeeded() && state.config.strict_status {
        return Err(AppError::Internal(format!(
            "execution {} failed: {}",
            execution.execution_id,
            execution.error.unwrap_or_default()
        )));
    }

    Ok((StatusCode::OK, Json(json!({ "status": "ok" }))).into_response())
}
