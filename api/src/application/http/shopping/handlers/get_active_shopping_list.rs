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
pub struct GetActiveShoppingListResponse {
    /// `null` until the user creates a list.
    pub data: Option<ShoppingList>,
}

#[utoipa::path(
    get,
    path = "/active",
    tag = "shopping",
    summary = "Get active shopping list",
    responses(
        (status = 200, body = GetActiveShoppingListResponse)
    )
)]
pub async fn get_active_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetActiveShoppingListResponse>, ApiError> {
    let list = state
        .service
        .active_shopping_list(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetActiveShoppingListResponse { data: list }))
}
