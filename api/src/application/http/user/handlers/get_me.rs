use axum::extract::State;
use hungry_owl_core::domain::user::{ports::UserService, value_objects::UserWithProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub data: UserWithProfile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Get current user",
    description = "Returns the signed-in user with their kitchen profile, if one was saved.",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMeResponse>, ApiError> {
    let me = state.service.get_me(identity).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetMeResponse { data: me }))
}
