use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    ingredient::entities::Ingredient,
};

/// A basic the user keeps around (salt, oil, ...), tracked only as in or out of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PantryStaple {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub in_stock: bool,
    pub updated_at: DateTime<Utc>,
}

impl PantryStaple {
    pub fn new(user_id: Uuid, ingredient_id: Uuid, in_stock: bool) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            user_id,
            ingredient_id,
            in_stock,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PantryStapleEntry {
    pub staple: PantryStaple,
    pub ingredient: Ingredient,
}
