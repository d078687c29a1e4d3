use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hungry_owl_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }

    fn body(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: self.status().as_u16(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::InvalidQuantity | CoreError::Invalid(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::Unauthorized => ApiError::Unauthorized(error.to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::ExternalServiceError(_) => {
                ApiError::BadGateway("Recipe generation is unavailable, try again".to_string())
            }
            CoreError::CacheError(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        }
        (self.status(), Json(self.body())).into_response()
    }
}

/// Flattens validator output into `field: message` pairs, sorted by field.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(validation_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use validator::Validate;

    use super::*;

    #[test]
    fn maps_core_errors_to_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::InvalidQuantity, StatusCode::BAD_REQUEST),
            (CoreError::Invalid("bad".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::Unauthorized, StatusCode::UNAUTHORIZED),
            (CoreError::Forbidden("no".to_string()), StatusCode::FORBIDDEN),
            (
                CoreError::ExternalServiceError("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
            (CoreError::CacheError("down".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn validation_messages_keep_core_wording() {
        let error = ApiError::from(CoreError::Invalid("max_time must be positive".to_string()));
        assert_eq!(
            error,
            ApiError::BadRequest("Invalid input: max_time must be positive".to_string())
        );
    }

    #[tokio::test]
    async fn renders_json_body() {
        let response = ApiError::NotFound("Resource not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            ApiErrorResponse {
                code: "E_NOT_FOUND".to_string(),
                message: "Resource not found".to_string(),
                status: 404,
            }
        );
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(range(min = 1, message = "count must be at least 1"))]
        count: i32,
    }

    async fn extract(body: &str) -> Result<ValidateJson<Payload>, ApiError> {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        ValidateJson::<Payload>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn validate_json_accepts_valid_payload() {
        let ValidateJson(payload) = extract(r#"{"name":"eggs","count":2}"#).await.unwrap();
        assert_eq!(payload.name, "eggs");
        assert_eq!(payload.count, 2);
    }

    #[tokio::test]
    async fn validate_json_reports_every_failed_rule() {
        let err = extract(r#"{"name":"","count":0}"#).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::BadRequest(
                "count: count must be at least 1; name: name is required".to_string()
            )
        );
    }

    #[tokio::test]
    async fn validate_json_rejects_malformed_json() {
        let err = extract("{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
