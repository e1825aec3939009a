//! HTTP API receiving Slack webhooks.

use crate::{APOLOGY, AppContext, CommandDispatcher};
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    routing::get,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Body of `GET /`, checked by the reverse proxy to see the server is up.
pub const HEALTH_PLACEHOLDER: &str = "nothing to see here";

/// API state containing the command dispatcher.
#[derive(Clone, Debug)]
pub struct ApiState {
    dispatcher: Arc<CommandDispatcher>,
}

impl ApiState {
    /// Creates API state over a shared application context.
    pub fn new(context: AppContext) -> Self {
        Self {
            dispatcher: Arc::new(CommandDispatcher::new(context)),
        }
    }

    /// Creates API state from an existing dispatcher.
    pub fn with_dispatcher(dispatcher: CommandDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Creates the webhook router.
///
/// - `GET /` returns [`HEALTH_PLACEHOLDER`]
/// - `POST /hooks/slack` runs a slash command and returns the reply
/// - `GET /hooks/slack` returns the apology
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/hooks/slack", get(slack_hook_get).post(slack_hook_post))
        .with_state(state)
}

/// Bind `addr` and serve the webhook router until the process stops.
///
/// # Errors
///
/// Returns error if the address cannot be bound.
#[instrument(skip(state))]
pub async fn serve(addr: &str, state: ApiState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening for Slack webhooks");
    axum::serve(listener, create_router(state)).await
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    HEALTH_PLACEHOLDER
}

async fn slack_hook_get() -> &'static str {
    APOLOGY
}

async fn slack_hook_post(
    State(state): State<ApiState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> String {
    match form {
        Ok(Form(fields)) => state.dispatcher.dispatch_form(&fields).await,
        Err(rejection) => {
            warn!(error = %rejection, "Undecodable webhook body");
            APOLOGY.to_string()
        }
    }
}
