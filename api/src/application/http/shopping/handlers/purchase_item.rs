use axum::extract::{Path, State};
use hungry_owl_core::domain::shopping::{
    ports::ShoppingListService, value_objects::PurchaseOutcome,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PurchaseItemResponse {
    pub data: PurchaseOutcome,
}

#[utoipa::path(
    post,
    path = "/{list_id}/items/{item_id}/purchase",
    tag = "shopping",
    summary = "Mark item purchased",
    description = "Adds the item to the fridge inventory, creating the catalog ingredient when needed, and checks it off the list.",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
        ("item_id" = Uuid, Path, description = "Item ID"),
    ),
    responses(
        (status = 200, body = PurchaseItemResponse),
        (status = 404, description = "List or item not found")
    )
)]
pub async fn purchase_item(
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<PurchaseItemResponse>, ApiError> {
    let outcome = state
        .service
        .mark_purchased(identity, list_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PurchaseItemResponse { data: outcome }))
}
