use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use hungry_owl_core::domain::inventory::ports::InventoryService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "inventory",
    summary = "Remove inventory item",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item ID"),
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn remove_from_inventory(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .remove_from_inventory(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
