use axum::extract::State;
use hungry_owl_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ingredient::validators::CreateIngredientValidator,
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
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create custom ingredient",
    description = "Returns the existing ingredient when one with the same name (any case) exists.",
    request_body = CreateIngredientValidator,
    responses(
        (status = 200, body = CreateIngredientResponse),
        (status = 400, description = "Invalid ingredient")
    )
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_custom_ingredient(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateIngredientResponse { data: ingredient }))
}
