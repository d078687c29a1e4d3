use crate::{
    domain::ingredient::entities::{Ingredient, IngredientCategory},
    entity::ingredients,
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: IngredientCategory::from(model.category.as_str()),
            aliases: model.aliases.clone(),
            common_units: model.common_units.clone(),
            emoji: model.emoji.clone(),
            shelf_life_days: model.shelf_life_days,
            usda_fdc_id: model.usda_fdc_id,
            description: model.description.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}
