//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ledpanel_app::ports::PanelStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the panel API routes at `/` next to a `/health` check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so browser dashboards on any origin can call the API.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: PanelStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<S>())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
