use axum::extract::State;
use hungry_owl_core::domain::shopping::{entities::ShoppingList, ports::ShoppingListService};
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
pub struct GetShoppingListsResponse {
    pub data: Vec<ShoppingList>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "shopping",
    summary = "List shopping lists",
    description = "Newest first.",
    responses(
        (status = 200, body = GetShoppingListsResponse)
    )
)]
pub async fn get_shopping_lists(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetShoppingListsResponse>, ApiError> {
    let lists = state
        .service
        .list_shopping_lists(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetShoppingListsResponse { data: lists }))
}
