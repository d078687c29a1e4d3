use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ingredient::entities::IngredientCategory, matching::availability::AvailabilityIndex,
    user::entities::SkillLevel,
};

/// At or below this many missing staples the kitchen counts as well stocked.
pub const WELL_STOCKED_MAX_MISSING: usize = 2;
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const WELL_STOCKED_MESSAGE: &str = "Great job! Your pantry is well-stocked for your skill level.";
pub const RESTOCK_MESSAGE: &str = "Adding these items would help you make more recipes.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StapleSuggestion {
    pub name: String,
    pub category: IngredientCategory,
    pub reason: String,
    pub emoji: String,
}

impl StapleSuggestion {
    fn new(name: &str, category: IngredientCategory, reason: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            reason: reason.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Two tiers of staples; the intermediate tier is skipped for beginners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaplesCatalog {
    pub core: Vec<StapleSuggestion>,
    pub intermediate: Vec<StapleSuggestion>,
}

impl Default for StaplesCatalog {
    fn default() -> Self {
        use IngredientCategory::*;

        Self {
            core: vec![
                StapleSuggestion::new("Olive Oil", Pantry, "Essential for cooking almost anything", "🫒"),
                StapleSuggestion::new("Salt", Pantry, "Basic seasoning for all dishes", "🧂"),
                StapleSuggestion::new("Black Pepper", Spices, "Universal seasoning", "🌶️"),
                StapleSuggestion::new("Garlic", Produce, "Adds depth to savory dishes", "🧄"),
                StapleSuggestion::new("Onion", Produce, "Base for countless recipes", "🧅"),
                StapleSuggestion::new("Butter", Dairy, "Essential for cooking and baking", "🧈"),
                StapleSuggestion::new("Egg", Protein, "Versatile protein for any meal", "🥚"),
                StapleSuggestion::new("Chicken Breast", Protein, "Lean protein that's easy to cook", "🍗"),
                StapleSuggestion::new("Rice", Grains, "Affordable base for many meals", "🍚"),
                StapleSuggestion::new("Pasta", Grains, "Quick and easy meal foundation", "🍝"),
            ],
            intermediate: vec![
                StapleSuggestion::new("Lemon", Produce, "Brightens flavors in dishes", "🍋"),
                StapleSuggestion::new("Ginger", Produce, "Essential for Asian cuisine", "🫚"),
                StapleSuggestion::new("Soy Sauce", Pantry, "Key umami flavor enhancer", "🥢"),
                StapleSuggestion::new("Cumin", Spices, "Essential for Mexican & Indian dishes", "🌿"),
                StapleSuggestion::new("Chicken Broth", Pantry, "Base for soups and sauces", "🥣"),
            ],
        }
    }
}

impl StaplesCatalog {
    /// Staples considered at `skill_level`, core tier first.
    pub fn tiers_for(&self, skill_level: SkillLevel) -> impl Iterator<Item = &StapleSuggestion> {
        let intermediate: &[StapleSuggestion] = match skill_level {
            SkillLevel::Beginner => &[],
            _ => &self.intermediate,
        };
        self.core.iter().chain(intermediate.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendations {
    pub recommendations: Vec<StapleSuggestion>,
    pub is_well_stocked: bool,
    pub message: String,
}

pub fn recommend(
    catalog: &StaplesCatalog,
    availability: &AvailabilityIndex,
    skill_level: SkillLevel,
) -> Recommendations {
    let missing: Vec<&StapleSuggestion> = catalog
        .tiers_for(skill_level)
        .filter(|staple| !availability.covers(&staple.name.to_lowercase()))
        .collect();

    if missing.len() <= WELL_STOCKED_MAX_MISSING {
        return Recommendations {
            recommendations: Vec::new(),
            is_well_stocked: true,
            message: WELL_STOCKED_MESSAGE.to_string(),
        };
    }

    Recommendations {
        recommendations: missing
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .cloned()
            .collect(),
        is_well_stocked: false,
        message: RESTOCK_MESSAGE.to_string(),
    }
}
