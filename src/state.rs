use std::sync::Arc;

use crate::config::Config;
use crate::workflow::SubmissionWorkflow;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub workflow: SubmissionWorkflow,
    pub config: Config,
}
