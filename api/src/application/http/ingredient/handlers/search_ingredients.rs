use axum::extract::{Query, State};
use hungry_owl_core::domain::ingredient::{
    entities::Ingredient, ports::IngredientService, value_objects::SearchIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ingredient::validators::SearchIngredientsQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "Search ingredients",
    description = "Case-insensitive name search that also matches exact aliases. Queries shorter than two characters return nothing; without a query the catalog is browsed alphabetically.",
    params(SearchIngredientsQuery),
    responses(
        (status = 200, body = SearchIngredientsResponse)
    )
)]
pub async fn search_ingredients(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    Query(query): Query<SearchIngredientsQuery>,
) -> Result<Response<SearchIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .search_ingredients(SearchIngredientsInput {
            query: query.q,
            limit: query.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchIngredientsResponse { data: ingredients }))
}
