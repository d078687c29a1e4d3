use axum::extract::State;
use hungry_owl_core::domain::shopping::{entities::ShoppingList, ports::ShoppingListService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

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
        shopping::validators::CreateShoppingListValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateShoppingListResponse {
    pub data: ShoppingList,
}

#[utoipa::path(
    post,
    path = "",
    tag = "shopping",
    summary = "Create shopping list",
    description = "Creates an empty list and makes it the only active one.",
    request_body = CreateShoppingListValidator,
    responses(
        (status = 201, body = CreateShoppingListResponse)
    )
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateShoppingListValidator>,
) -> Result<Response<CreateShoppingListResponse>, ApiError> {
    let list = state
        .service
        .create_shopping_list(identity, payload.name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateShoppingListResponse { data: list }))
}
