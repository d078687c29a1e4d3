use axum::extract::{Path, State};
use hungry_owl_core::domain::inventory::{
    ports::InventoryService,
    value_objects::{AdjustQuantityInput, QuantityAdjustment},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        inventory::validators::AdjustQuantityValidator,
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
pub struct AdjustQuantityResponse {
    pub data: QuantityAdjustment,
}

#[utoipa::path(
    post,
    path = "/{item_id}/adjust",
    tag = "inventory",
    summary = "Adjust quantity",
    description = "Adds a signed delta. The item is deleted when the new quantity is zero or below.",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item ID"),
    ),
    request_body = AdjustQuantityValidator,
    responses(
        (status = 200, body = AdjustQuantityResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn adjust_quantity(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AdjustQuantityValidator>,
) -> Result<Response<AdjustQuantityResponse>, ApiError> {
    let adjustment = state
        .service
        .adjust_quantity(
            identity,
            AdjustQuantityInput {
                item_id,
                delta: payload.delta,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AdjustQuantityResponse { data: adjustment }))
}
