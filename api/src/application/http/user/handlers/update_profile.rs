use axum::extract::State;
use hungry_owl_core::domain::user::{entities::UserProfile, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::UpdateProfileValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    summary = "Update profile",
    description = "Creates or updates household size, dietary constraints, equipment and skill level. Omitted fields keep their value.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Invalid profile")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
