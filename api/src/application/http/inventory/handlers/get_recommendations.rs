use axum::extract::State;
use hungry_owl_core::domain::matching::{
    ports::RecommendationService, recommendations::Recommendations,
};
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
pub struct GetRecommendationsResponse {
    pub data: Recommendations,
}

#[utoipa::path(
    get,
    path = "/recommendations",
    tag = "inventory",
    summary = "Recommended staples",
    description = "Up to five staples the kitchen is missing for the user's skill level.",
    responses(
        (status = 200, body = GetRecommendationsResponse)
    )
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    let recommendations = state
        .service
        .recommended_ingredients(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecommendationsResponse {
        data: recommendations,
    }))
}
