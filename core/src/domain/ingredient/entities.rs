use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

/// Units given to ingredients created outside the seeded catalog.
pub const DEFAULT_CUSTOM_UNITS: [&str; 4] = ["piece", "oz", "cup", "lb"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientCategory {
    Produce,
    Protein,
    Dairy,
    Pantry,
    Frozen,
    Beverages,
    Spices,
    Grains,
    #[default]
    Other,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Produce => "PRODUCE",
            IngredientCategory::Protein => "PROTEIN",
            IngredientCategory::Dairy => "DAIRY",
            IngredientCategory::Pantry => "PANTRY",
            IngredientCategory::Frozen => "FROZEN",
            IngredientCategory::Beverages => "BEVERAGES",
            IngredientCategory::Spices => "SPICES",
            IngredientCategory::Grains => "GRAINS",
            IngredientCategory::Other => "OTHER",
        }
    }
}

impl From<&str> for IngredientCategory {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "PRODUCE" => IngredientCategory::Produce,
            "PROTEIN" => IngredientCategory::Protein,
            "DAIRY" => IngredientCategory::Dairy,
            "PANTRY" => IngredientCategory::Pantry,
            "FROZEN" => IngredientCategory::Frozen,
            "BEVERAGES" => IngredientCategory::Beverages,
            "SPICES" => IngredientCategory::Spices,
            "GRAINS" => IngredientCategory::Grains,
            _ => IngredientCategory::Other,
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: IngredientCategory,
    pub aliases: Vec<String>,
    pub common_units: Vec<String>,
    pub emoji: Option<String>,
    /// Days an item keeps after purchase, used for default expirations.
    pub shelf_life_days: Option<i32>,
    pub usda_fdc_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub name: String,
    pub category: IngredientCategory,
    pub aliases: Vec<String>,
    pub common_units: Vec<String>,
    pub emoji: Option<String>,
    pub shelf_life_days: Option<i32>,
    pub usda_fdc_id: Option<i32>,
    pub description: Option<String>,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            name: config.name,
            category: config.category,
            aliases: config.aliases,
            common_units: config.common_units,
            emoji: config.emoji,
            shelf_life_days: config.shelf_life_days,
            usda_fdc_id: config.usda_fdc_id,
            description: config.description,
            created_at: now,
            updated_at: now,
        }
    }
}
