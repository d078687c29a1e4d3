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
pub struct GetInventoryResponse {
    pub data: Vec<InventoryEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "List inventory",
    description = "Items with their ingredient and freshness status, soonest expiration first; undated items last.",
    responses(
        (status = 200, body = GetInventoryResponse)
    )
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetInventoryResponse>, ApiError> {
    let entries = state
        .service
        .list_inventory(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetInventoryResponse { data: entries }))
}
