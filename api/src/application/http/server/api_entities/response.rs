use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    Accepted(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Response::Accepted(body) => (StatusCode::ACCEPTED, Json(body)).into_response(),
        }
    }
}
