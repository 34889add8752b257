//! Web UI routes and server.

use crate::amazon::{AmazonClient, PageFetch};
use crate::commands::{Analysis, AnalyzeCommand, FETCH_FAILED_MESSAGE};
use crate::config::Config;
use crate::web::json_error::{ErrorToResponse, JsonError};
use crate::web::page::{Pages, Session};
use anyhow::{Context, Result};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn PageFetch>,
    command: Arc<AnalyzeCommand>,
    pages: Arc<Pages>,
}

impl AppState {
    /// Builds state around the real HTTP client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = AmazonClient::new(config).context("Failed to create HTTP client")?;
        Self::with_client(config, Arc::new(client))
    }

    /// Builds state around a provided client (for testing).
    pub fn with_client(config: &Config, client: Arc<dyn PageFetch>) -> Result<Self> {
        Ok(Self {
            client,
            command: Arc::new(AnalyzeCommand::new(config.clone())),
            pages: Arc::new(Pages::new()?),
        })
    }

    async fn run(&self, url: &str) -> Analysis {
        self.command.run_with_client(self.client.as_ref(), url).await
    }
}

/// Builds the router for the web UI.
pub struct AppBuilder {
    app: Router,
}

impl AppBuilder {
    pub fn new(state: AppState) -> Self {
        let app = Router::new()
            .route("/", get(index))
            .route("/analyze", get(analyze))
            .route("/api/analyze", get(api_analyze))
            .with_state(state);
        Self { app }
    }

    pub fn with_trace_layer(self) -> Self {
        Self { app: self.app.layer(TraceLayer::new_for_http()) }
    }

    pub fn build(self) -> Router {
        self.app
    }
}

/// Serves the web UI.
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Binds the configured address and serves until shut down.
    pub async fn run(&self) -> Result<()> {
        let state = AppState::new(&self.config)?;
        let app = AppBuilder::new(state).with_trace_layer().build();

        let listener = TcpListener::bind(&self.config.bind)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind))?;

        info!("Listening on http://{}", listener.local_addr()?);
        axum::serve(listener, app).await.context("Server error")
    }
}

/// Render failures become a plain 500.
fn page_response(page: Result<String>) -> Response {
    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Input form.
async fn index(State(state): State<AppState>, Query(session): Query<Session>) -> Response {
    page_response(state.pages.form(&session))
}

/// Runs one analysis and renders the results or the failure message.
async fn analyze(State(state): State<AppState>, Query(session): Query<Session>) -> Response {
    let Some(url) = session.target() else {
        return page_response(state.pages.form(&session));
    };

    debug!("UI analysis requested for {}", url);
    let page = match state.run(url).await {
        Analysis::Completed(report) => state.pages.results(&session, &report),
        Analysis::Failed(_) => state.pages.failure(&session),
    };
    page_response(page)
}

/// Runs one analysis and returns the report as JSON.
async fn api_analyze(State(state): State<AppState>, Query(session): Query<Session>) -> Response {
    let Some(url) = session.target() else {
        return JsonError::new("Missing url parameter").to_response(StatusCode::BAD_REQUEST);
    };

    match state.run(url).await {
        Analysis::Completed(report) => Json(report).into_response(),
        Analysis::Failed(_) => {
            JsonError::new(FETCH_FAILED_MESSAGE).to_response(StatusCode::BAD_GATEWAY)
        }
    }
}
