pub mod agenda;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;
pub mod views;
pub mod widgets;
pub mod workflow;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SubmissionStore;
use crate::state::{AppState, SharedState};
use crate::workflow::SubmissionWorkflow;

pub const WORKFLOW_NAME: &str = "ContactFormStateMachine";

pub fn build_app(store: Arc<dyn SubmissionStore>, config: Config) -> Router {
    let workflow = SubmissionWorkflow::new(WORKFLOW_NAME, store);

    let cors = cors_layer(&config);
    let body_limit = RequestBodyLimitLayer::new(config.max_body_size);
    let static_dir = config.static_dir.clone();

    let state: SharedState = Arc::new(AppState {
        workflow,
        config,
    });

    Router::new()
        .merge(routes::contact_routes().layer(cors).layer(body_limit))
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// Browser forms on the site and its `api.` subdomain post cross-origin.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers([header::CONTENT_TYPE])
}

async fn health() -> &'static str {
    "ok"
}
