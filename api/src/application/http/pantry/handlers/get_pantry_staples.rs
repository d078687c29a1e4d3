use axum::extract::State;
use hungry_owl_core::domain::pantry::{entities::PantryStapleEntry, ports::PantryService};
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
pub struct GetPantryStaplesResponse {
    pub data: Vec<PantryStapleEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pantry",
    summary = "List pantry staples",
    responses(
        (status = 200, body = GetPantryStaplesResponse)
    )
)]
pub async fn get_pantry_staples(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPantryStaplesResponse>, ApiError> {
    let staples = state
        .service
        .list_pantry_staples(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPantryStaplesResponse { data: staples }))
}
