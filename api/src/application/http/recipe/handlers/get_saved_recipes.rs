use axum::extract::State;
use hungry_owl_core::domain::recipe::{entities::SavedRecipe, ports::RecipeService};
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
pub struct GetSavedRecipesResponse {
    pub data: Vec<SavedRecipe>,
}

#[utoipa::path(
    get,
    path = "/saved",
    tag = "recipe",
    summary = "List saved recipes",
    description = "Most recently saved first.",
    responses(
        (status = 200, body = GetSavedRecipesResponse)
    )
)]
pub async fn get_saved_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSavedRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_saved_recipes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedRecipesResponse { data: recipes }))
}
