use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::IngredientCategory;

pub const DEFAULT_BROWSE_LIMIT: u64 = 50;
pub const DEFAULT_SEARCH_LIMIT: u64 = 15;
pub const MIN_SEARCH_LENGTH: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct SearchIngredientsInput {
    pub query: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomIngredientInput {
    pub name: String,
    pub description: Option<String>,
    pub category: IngredientCategory,
    pub emoji: Option<String>,
}

/// An ingredient picked from the USDA food search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportIngredientInput {
    pub name: String,
    pub category: IngredientCategory,
    pub common_units: Vec<String>,
    pub emoji: Option<String>,
    pub fdc_id: Option<i32>,
}
