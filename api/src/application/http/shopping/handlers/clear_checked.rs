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
pub struct ClearCheckedResponse {
    pub data: ShoppingList,
}

#[utoipa::path(
    post,
    path = "/{list_id}/clear-checked",
    tag = "shopping",
    summary = "Clear checked items",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
    responses(
        (status = 200, body = ClearCheckedResponse),
        (status = 404, description = "List not found")
    )
)]
pub async fn clear_checked(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ClearCheckedResponse>, ApiError> {
    let list = state
        .service
        .clear_checked(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearCheckedResponse { data: list }))
}
