use axum::extract::{Path, State};
use hungry_owl_core::domain::inventory::{
    ports::InventoryService,
    value_objects::{InventoryEntry, UpdateInventoryItemInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        inventory::validators::UpdateInventoryItemValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateInventoryItemResponse {
    pub data: InventoryEntry,
}

#[utoipa::path(
    patch,
    path = "/{item_id}",
    tag = "inventory",
    summary = "Update inventory item",
    description = "Changes the unit and/or expiration date. Quantities change through the adjust endpoint.",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item ID"),
    ),
    request_body = UpdateInventoryItemValidator,
    responses(
        (status = 200, body = UpdateInventoryItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_inventory_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateInventoryItemValidator>,
) -> Result<Response<UpdateInventoryItemResponse>, ApiError> {
    let entry = state
        .service
        .update_inventory_item(
            identity,
            UpdateInventoryItemInput {
                item_id,
                unit: payload.unit,
                expiration_date: payload.expiration_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateInventoryItemResponse { data: entry }))
}
