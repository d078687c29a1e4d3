use axum::extract::State;
use hungry_owl_core::domain::inventory::{ports::InventoryService, value_objects::InventoryEntry};
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
pub struct GetExpiringItemsResponse {
    pub data: Vec<InventoryEntry>,
}

#[utoipa::path(
    get,
    path = "/expiring",
    tag = "inventory",
    summary = "List expiring items",
    description = "Items whose status is USE_SOON or EXPIRING.",
    responses(
        (status = 200, body = GetExpiringItemsResponse)
    )
)]
pub async fn get_expiring_items(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetExpiringItemsResponse>, ApiError> {
    let entries = state
        .service
        .expiring_items(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetExpiringItemsResponse { data: entries }))
}
