use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::error::{Result, SiteError};
use crate::ui::render_document;

/// Build the router: the page at `/`, assets under `/static`.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(index_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided state.
pub async fn start_server(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| SiteError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        variant = %state.config.site.variant,
        "Server started"
    );

    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}

/// Index page handler. Renders on every request so the footer year is current.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let variant = state.config.site.variant;
    let year = state.clock.year();
    let html = render_document(variant, year);

    tracing::debug!(
        name: "page.rendered",
        variant = %variant,
        year = year,
        bytes = html.len(),
        "Page rendered"
    );

    Html(html)
}
