use axum::extract::State;
use hungry_owl_core::domain::recipe::{entities::SavedRecipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::SaveRecipeValidator,
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
pub struct SaveRecipeResponse {
    pub data: SavedRecipe,
}

#[utoipa::path(
    post,
    path = "/saved",
    tag = "recipe",
    summary = "Save recipe",
    request_body = SaveRecipeValidator,
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 400, description = "Recipe has no name")
    )
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let saved = state
        .service
        .save_recipe(identity, payload.recipe)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveRecipeResponse { data: saved }))
}
