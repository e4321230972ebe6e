//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ledpanel_domain::error::PanelError;

/// Maps [`PanelError`] to a plain-text HTTP response with the appropriate status code.
#[derive(Debug)]
pub struct ApiError(PanelError);

impl From<PanelError> for ApiError {
    fn from(err: PanelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PanelError::Validation(err) => {
                tracing::debug!(error = ?err, "rejecting invalid panel command");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledpanel_domain::error::ValidationError;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let err = ApiError::from(PanelError::Validation(ValidationError::UnknownLight {
            name: "blue".to_string(),
        }));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
