use axum::extract::{Path, State};
use hungry_owl_core::domain::pantry::{entities::PantryStapleEntry, ports::PantryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        pantry::validators::TogglePantryStapleValidator,
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
pub struct TogglePantryStapleResponse {
    pub data: PantryStapleEntry,
}

#[utoipa::path(
    put,
    path = "/{ingredient_id}",
    tag = "pantry",
    summary = "Set pantry staple stock",
    description = "Marks a staple as in or out of stock, creating the staple on first use.",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    request_body = TogglePantryStapleValidator,
    responses(
        (status = 200, body = TogglePantryStapleResponse),
        (status = 404, description = "Ingredient not found")
    )
)]
pub async fn toggle_pantry_staple(
    Path(ingredient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<TogglePantryStapleValidator>,
) -> Result<Response<TogglePantryStapleResponse>, ApiError> {
    let staple = state
        .service
        .toggle_pantry_staple(identity, ingredient_id, payload.in_stock)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TogglePantryStapleResponse { data: staple }))
}
