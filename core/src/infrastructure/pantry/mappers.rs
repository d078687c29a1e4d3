use crate::{domain::pantry::entities::PantryStaple, entity::pantry_staples};

impl From<&pantry_staples::Model> for PantryStaple {
    fn from(model: &pantry_staples::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            ingredient_id: model.ingredient_id,
            in_stock: model.in_stock,
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<pantry_staples::Model> for PantryStaple {
    fn from(model: pantry_staples::Model) -> Self {
        Self::from(&model)
    }
}
