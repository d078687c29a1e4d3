use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use hungry_owl_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    delete,
    path = "/saved/{recipe_id}",
    tag = "recipe",
    summary = "Delete saved recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn delete_saved_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_saved_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
