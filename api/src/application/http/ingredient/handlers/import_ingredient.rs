use axum::extract::State;
use hungry_owl_core::domain::ingredient::{entities::Ingredient, ports::IngredientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ingredient::validators::ImportIngredientValidator,
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
pub struct ImportIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "/import",
    tag = "ingredient",
    summary = "Import ingredient",
    description = "Adds a food picked from the USDA database, deduplicated by FDC id and name.",
    request_body = ImportIngredientValidator,
    responses(
        (status = 200, body = ImportIngredientResponse),
        (status = 400, description = "Invalid ingredient")
    )
)]
pub async fn import_ingredient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ImportIngredientValidator>,
) -> Result<Response<ImportIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .import_ingredient(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ImportIngredientResponse { data: ingredient }))
}
