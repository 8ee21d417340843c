use crate::error::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Adapts [`Error`] values into the API's JSON error responses.
pub(crate) struct APIError(Error);

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, body) = match &err {
            Error::Unauthorized | Error::InvalidToken => {
                (StatusCode::UNAUTHORIZED, json!({"error": format!("{err}")}))
            }
            Error::Validation(rule) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Validation error", "details": format!("{rule}")}),
            ),
            Error::NameTaken(fqdn) => (
                StatusCode::CONFLICT,
                json!({"error": format!("{err}"), "fqdn": fqdn}),
            ),
            Error::RecordNotFound => {
                (StatusCode::NOT_FOUND, json!({"error": format!("{err}")}))
            }
            Error::JsonExtractorRejection(rejection) => {
                let status = match rejection {
                    JsonRejection::JsonDataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    JsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
                    JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, json!({"error": format!("{rejection}")}))
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": format!("{err}")}),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
