//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod alarm;
pub mod body;
#[allow(clippy::missing_errors_doc)]
pub mod lights;
#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::routing::{get, post};

use ledpanel_app::ports::PanelStore;

use crate::state::AppState;

/// Build the panel API router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: PanelStore + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status::get::<S>))
        .route("/led/{color}", post(lights::set::<S>))
        .route("/alarm", post(alarm::set::<S>))
}
