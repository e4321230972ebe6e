//! Status query handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ledpanel_app::ports::PanelStore;
use ledpanel_domain::status::PanelStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the status endpoint.
pub enum GetResponse {
    Ok(Json<PanelStatus>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /status`
pub async fn get<S>(State(state): State<AppState<S>>) -> Result<GetResponse, ApiError>
where
    S: PanelStore + Send + Sync + 'static,
{
    let status = state.panel_service.status().await?;
    Ok(GetResponse::Ok(Json(status)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ledpanel_app::memory_store::InMemoryPanelStore;
    use ledpanel_app::services::panel_service::PanelService;
    use ledpanel_domain::light::LightColor;
    use tower::ServiceExt;

    use crate::router::build;
    use crate::state::AppState;

    #[tokio::test]
    async fn should_return_initial_snapshot() {
        let app = build(AppState::new(PanelService::new(InMemoryPanelStore::new())));

        let response = app
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "leds": {"red": false, "yellow": false, "green": false},
                "alarmOn": false,
            })
        );
    }

    #[tokio::test]
    async fn should_reflect_service_changes() {
        let service = PanelService::new(InMemoryPanelStore::new());
        service.set_light(LightColor::Red.as_str(), true).await.unwrap();
        service.set_alarm(true).await.unwrap();
        let app = build(AppState::new(service));

        let response = app
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["leds"]["red"], true);
        assert_eq!(body["alarmOn"], true);
    }
}
