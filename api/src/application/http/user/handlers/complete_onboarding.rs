use axum::extract::State;
use hungry_owl_core::domain::user::{entities::User, ports::UserService};
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
pub struct CompleteOnboardingResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/onboarding",
    tag = "user",
    summary = "Complete onboarding",
    responses(
        (status = 200, body = CompleteOnboardingResponse)
    )
)]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CompleteOnboardingResponse>, ApiError> {
    let user = state
        .service
        .complete_onboarding(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CompleteOnboardingResponse { data: user }))
}
