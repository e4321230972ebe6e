//! Light command handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ledpanel_app::ports::PanelStore;

use crate::api::body::StateBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the set endpoint.
pub enum SetResponse {
    Ok,
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `POST /led/{color}`
///
/// The body never causes a rejection, so an unknown color always yields
/// `400 Invalid LED color`.
pub async fn set<S>(
    State(state): State<AppState<S>>,
    Path(color): Path<String>,
    StateBody(on): StateBody,
) -> Result<SetResponse, ApiError>
where
    S: PanelStore + Send + Sync + 'static,
{
    state.panel_service.set_light(&color, on).await?;
    Ok(SetResponse::Ok)
}
