use axum::extract::{Path, State};
use hungry_owl_core::domain::shopping::{entities::ShoppingList, ports::ShoppingListService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping::validators::AddShoppingItemValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddItemResponse {
    pub data: ShoppingList,
}

#[utoipa::path(
    post,
    path = "/{list_id}/items",
    tag = "shopping",
    summary = "Add item",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
    request_body = AddShoppingItemValidator,
    responses(
        (status = 200, body = AddItemResponse),
        (status = 404, description = "List not found")
    )
)]
pub async fn add_item(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddShoppingItemValidator>,
) -> Result<Response<AddItemResponse>, ApiError> {
    let list = state
        .service
        .add_item(identity, list_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AddItemResponse { data: list }))
}
