use axum::extract::State;
use hungry_owl_core::domain::inventory::{ports::InventoryService, value_objects::InventoryEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        inventory::validators::AddToInventoryValidator,
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
pub struct AddToInventoryResponse {
    pub data: InventoryEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "inventory",
    summary = "Add to inventory",
    description = "Adds the quantity to the existing row for the same ingredient and storage location, or creates one. New rows get a default expiration from the ingredient's shelf life.",
    request_body = AddToInventoryValidator,
    responses(
        (status = 200, body = AddToInventoryResponse),
        (status = 400, description = "Invalid quantity or unit"),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn add_to_inventory(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddToInventoryValidator>,
) -> Result<Response<AddToInventoryResponse>, ApiError> {
    let entry = state
        .service
        .add_to_inventory(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AddToInventoryResponse { data: entry }))
}
