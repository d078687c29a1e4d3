use std::{cmp::Ordering, collections::HashMap};

use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{entities::Ingredient, ports::IngredientRepository},
    inventory::{
        entities::{InventoryItem, StorageLocation},
        merge::{default_expiration, validate_quantity},
        ports::{InventoryRepository, InventoryService},
        value_objects::{
            AddToInventoryInput, AdjustQuantityInput, InventoryEntry, InventoryUpsert,
            QuantityAdjustment, UpdateInventoryItemInput,
        },
    },
    pantry::ports::PantryRepository,
    recipe::ports::{LLMClient, RecipeCache, RecipeRepository},
    shopping::ports::ShoppingListRepository,
    user::ports::UserRepository,
};

/// Expiration ascending with undated items last, then ingredient name.
fn compare_entries(a: &InventoryEntry, b: &InventoryEntry) -> Ordering {
    let by_expiration = match (a.item.expiration_date, b.item.expiration_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_expiration.then_with(|| {
        a.ingredient
            .name
            .to_lowercase()
            .cmp(&b.ingredient.name.to_lowercase())
    })
}

impl<I, INV, P, U, S, R, LLM, C> Service<I, INV, P, U, S, R, LLM, C>
where
    I: IngredientRepository,
    INV: InventoryRepository,
    P: PantryRepository,
    U: UserRepository,
    S: ShoppingListRepository,
    R: RecipeRepository,
    LLM: LLMClient,
    C: RecipeCache,
{
    /// The user's inventory joined with ingredients, in display order.
    pub(crate) async fn inventory_entries(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<InventoryEntry>, CoreError> {
        let items = self.inventory_repository.list_by_user(user_id).await?;
        self.join_ingredients(items, Utc::now()).await
    }

    async fn join_ingredients(
        &self,
        items: Vec<InventoryItem>,
        now: DateTime<Utc>,
    ) -> Result<Vec<InventoryEntry>, CoreError> {
        let mut ids: Vec<Uuid> = items.iter().map(|item| item.ingredient_id).collect();
        ids.sort();
        ids.dedup();

        let ingredients: HashMap<Uuid, Ingredient> = self
            .ingredient_repository
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let Some(ingredient) = ingredients.get(&item.ingredient_id) else {
                tracing::warn!(
                    item_id = %item.id,
                    ingredient_id = %item.ingredient_id,
                    "inventory item references a missing ingredient"
                );
                continue;
            };
            entries.push(InventoryEntry::new(item, ingredient.clone(), now));
        }

        entries.sort_by(compare_entries);
        Ok(entries)
    }

    /// Route a quantity of `ingredient` through the merge rule.
    pub(crate) async fn merge_into_inventory(
        &self,
        user_id: Uuid,
        ingredient: Ingredient,
        quantity: f64,
        unit: String,
        storage_location: StorageLocation,
        explicit_expiration: Option<DateTime<Utc>>,
    ) -> Result<InventoryEntry, CoreError> {
        let quantity = validate_quantity(quantity)?;
        let now = Utc::now();

        let outcome = self
            .inventory_repository
            .upsert(InventoryUpsert {
                user_id,
                ingredient_id: ingredient.id,
                quantity,
                unit,
                storage_location,
                explicit_expiration,
                default_expiration: default_expiration(ingredient.shelf_life_days, now),
            })
            .await?;

        tracing::debug!(
            item_id = %outcome.item.id,
            merged = outcome.merged,
            "inventory upsert applied"
        );

        Ok(InventoryEntry::new(outcome.item, ingredient, now))
    }

    async fn owned_item(&self, item_id: Uuid, user_id: Uuid) -> Result<InventoryItem, CoreError> {
        self.inventory_repository
            .get_by_id(item_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn entry_for(&self, item: InventoryItem) -> Result<InventoryEntry, CoreError> {
        let ingredient = self
            .ingredient_repository
            .get_by_id(item.ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(InventoryEntry::new(item, ingredient, Utc::now()))
    }
}

impl<I, INV, P, U, S, R, LLM, C> InventoryService for Service<I, INV, P, U, S, R, LLM, C>
where
    I: IngredientRepository,
    INV: InventoryRepository,
    P: PantryRepository,
    U: UserRepository,
    S: ShoppingListRepository,
    R: RecipeRepository,
    LLM: LLMClient,
    C: RecipeCache,
{
    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn list_inventory(&self, identity: Identity) -> Result<Vec<InventoryEntry>, CoreError> {
        self.inventory_entries(identity.id()).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), ingredient_id = %input.ingredient_id))]
    async fn add_to_inventory(
        &self,
        identity: Identity,
        input: AddToInventoryInput,
    ) -> Result<InventoryEntry, CoreError> {
        validate_quantity(input.quantity)?;

        let ingredient = self
            .ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.merge_into_inventory(
            identity.id(),
            ingredient,
            input.quantity,
            input.unit,
            input.storage_location.unwrap_or_default(),
            input.expiration_date,
        )
        .await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), item_id = %input.item_id))]
    async fn update_inventory_item(
        &self,
        identity: Identity,
        input: UpdateInventoryItemInput,
    ) -> Result<InventoryEntry, CoreError> {
        if let Some(unit) = &input.unit
            && unit.trim().is_empty()
        {
            return Err(CoreError::Invalid("unit must not be empty".to_string()));
        }

        let mut item = self.owned_item(input.item_id, identity.id()).await?;
        item.update(input.unit, input.expiration_date);

        let item = self.inventory_repository.update_item(item).await?;
        self.entry_for(item).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), item_id = %input.item_id, delta = input.delta))]
    async fn adjust_quantity(
        &self,
        identity: Identity,
        input: AdjustQuantityInput,
    ) -> Result<QuantityAdjustment, CoreError> {
        if !input.delta.is_finite() {
            return Err(CoreError::InvalidQuantity);
        }

        self.inventory_repository
            .apply_quantity_delta(input.item_id, identity.id(), input.delta)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn remove_from_inventory(&self, identity: Identity, item_id: Uuid) -> Result<(), CoreError> {
        if self
            .inventory_repository
            .delete_item(item_id, identity.id())
            .await?
        {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn expiring_items(&self, identity: Identity) -> Result<Vec<InventoryEntry>, CoreError> {
        let entries = self.inventory_entries(identity.id()).await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.status.needs_attention())
            .collect())
    }
}
