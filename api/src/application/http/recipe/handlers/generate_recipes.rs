use axum::extract::State;
use hungry_owl_core::domain::recipe::{entities::GeneratedRecipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GenerateRecipesValidator,
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
pub struct GenerateRecipesResponse {
    pub data: Vec<GeneratedRecipe>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipes",
    description = "Asks the language model for recipes that fit the kitchen and profile, then ranks them by the share of required ingredients already on hand. Identical requests against an unchanged inventory are served from cache.",
    request_body = GenerateRecipesValidator,
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, description = "Invalid options"),
        (status = 502, description = "Recipe generation failed")
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .generate_recipes(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: recipes }))
}
