use axum::extract::{Path, State};
use hungry_owl_core::domain::shopping::{entities::ShoppingList, ports::ShoppingListService};
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
pub struct ToggleItemResponse {
    pub data: ShoppingList,
}

#[utoipa::path(
    post,
    path = "/{list_id}/items/{item_id}/toggle",
    tag = "shopping",
    summary = "Toggle item",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
        ("item_id" = Uuid, Path, description = "Item ID"),
    ),
    responses(
        (status = 200, body = ToggleItemResponse),
        (status = 404, description = "List or item not found")
    )
)]
pub async fn toggle_item(
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleItemResponse>, ApiError> {
    let list = state
        .service
        .toggle_item(identity, list_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleItemResponse { data: list }))
}
