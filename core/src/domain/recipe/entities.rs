use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    matching::scorer::{IngredientRequirement, MatchScore},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "INTERMEDIATE" => Difficulty::Intermediate,
            "ADVANCED" => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
    Dessert,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Snack => "SNACK",
            MealType::Dessert => "DESSERT",
        }
    }
}

impl From<&str> for MealType {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "BREAKFAST" => MealType::Breakfast,
            "LUNCH" => MealType::Lunch,
            "SNACK" => MealType::Snack,
            "DESSERT" => MealType::Dessert,
            _ => MealType::Dinner,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
}

impl IngredientRequirement for RecipeIngredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_optional(&self) -> bool {
        self.optional
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub step_number: i32,
    pub instruction: String,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// A recipe suggested by the language model, annotated with how well the
/// user's kitchen covers it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedRecipe {
    pub name: String,
    pub description: String,
    pub hero_emoji: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<RecipeStep>,
    pub total_time: i32,
    pub active_time: i32,
    pub difficulty: Difficulty,
    pub cuisine_type: String,
    pub meal_type: MealType,
    pub is_one_pot: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub equipment: Vec<String>,
    pub nutrition: Nutrition,
    pub servings: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_ingredients: Option<Vec<String>>,
}

impl GeneratedRecipe {
    pub fn annotate(&mut self, score: MatchScore) {
        self.match_percentage = Some(score.match_percentage);
        self.missing_ingredients = Some(score.missing);
    }

    /// The recipe content without per-user match annotations.
    pub fn without_match(mut self) -> Self {
        self.match_percentage = None;
        self.missing_ingredients = None;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub content: GeneratedRecipe,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(user_id: Uuid, content: GeneratedRecipe) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            user_id,
            content: content.without_match(),
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub recipe: Recipe,
}

impl SavedRecipe {
    pub fn new(recipe: Recipe) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            user_id: recipe.user_id,
            saved_at: now,
            recipe,
        }
    }
}
