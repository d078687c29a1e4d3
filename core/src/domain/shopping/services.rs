use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{entities::IngredientConfig, ports::IngredientRepository},
    inventory::{entities::StorageLocation, ports::InventoryRepository},
    pantry::ports::PantryRepository,
    recipe::ports::{LLMClient, RecipeCache, RecipeRepository},
    shopping::{
        entities::{ShoppingItem, ShoppingList},
        ports::{ShoppingListRepository, ShoppingListService},
        value_objects::{DEFAULT_LIST_NAME, NewShoppingItem, PurchaseOutcome},
    },
    user::ports::UserRepository,
};

/// Units offered for an ingredient created from a purchased list item.
fn purchase_units(item: &ShoppingItem) -> Vec<String> {
    let mut units = vec![item.unit.clone()];
    for unit in ["piece", "oz", "cup"] {
        if !units.iter().any(|u| u == unit) {
            units.push(unit.to_string());
        }
    }
    units
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
    async fn owned_list(&self, list_id: Uuid, user_id: Uuid) -> Result<ShoppingList, CoreError> {
        self.shopping_list_repository
            .get_by_id(list_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<I, INV, P, U, S, R, LLM, C> ShoppingListService for Service<I, INV, P, U, S, R, LLM, C>
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
    async fn list_shopping_lists(&self, identity: Identity) -> Result<Vec<ShoppingList>, CoreError> {
        self.shopping_list_repository
            .list_by_user(identity.id())
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn active_shopping_list(
        &self,
        identity: Identity,
    ) -> Result<Option<ShoppingList>, CoreError> {
        self.shopping_list_repository.get_active(identity.id()).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn create_shopping_list(
        &self,
        identity: Identity,
        name: Option<String>,
    ) -> Result<ShoppingList, CoreError> {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string());

        self.shopping_list_repository
            .create_active(ShoppingList::new(identity.id(), name))
            .await
    }

    #[instrument(skip(self, item), fields(user_id = %identity.id()))]
    async fn add_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item: NewShoppingItem,
    ) -> Result<ShoppingList, CoreError> {
        if item.name.trim().is_empty() {
            return Err(CoreError::Invalid("item name is required".to_string()));
        }

        let mut list = self.owned_list(list_id, identity.id()).await?;
        list.add_item(item)?;

        self.shopping_list_repository.save_items(list).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn toggle_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> Result<ShoppingList, CoreError> {
        let mut list = self.owned_list(list_id, identity.id()).await?;
        list.toggle_item(item_id)?;

        self.shopping_list_repository.save_items(list).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn remove_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> Result<ShoppingList, CoreError> {
        let mut list = self.owned_list(list_id, identity.id()).await?;
        list.remove_item(item_id)?;

        self.shopping_list_repository.save_items(list).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn clear_checked(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> Result<ShoppingList, CoreError> {
        let mut list = self.owned_list(list_id, identity.id()).await?;
        let removed = list.clear_checked();
        tracing::debug!(removed, "cleared checked items");

        self.shopping_list_repository.save_items(list).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn mark_purchased(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> Result<PurchaseOutcome, CoreError> {
        let mut list = self.owned_list(list_id, identity.id()).await?;
        let item = list.item(item_id)?.clone();
        if item.checked {
            return Err(CoreError::Invalid(
                "item is already checked off".to_string(),
            ));
        }

        let linked = match item.ingredient_id {
            Some(ingredient_id) => {
                self.ingredient_repository
                    .get_by_id(ingredient_id)
                    .await?
            }
            None => None,
        };

        let ingredient = match linked {
            Some(ingredient) => ingredient,
            None => {
                self.find_or_create_ingredient(IngredientConfig {
                    name: item.name.trim().to_string(),
                    category: item.category,
                    aliases: Vec::new(),
                    common_units: purchase_units(&item),
                    emoji: item.emoji.clone(),
                    shelf_life_days: None,
                    usda_fdc_id: None,
                    description: None,
                })
                .await?
            }
        };

        let inventory = self
            .merge_into_inventory(
                identity.id(),
                ingredient,
                item.quantity,
                item.unit.clone(),
                StorageLocation::Fridge,
                None,
            )
            .await?;

        list.check_item(item_id)?;
        let list = self.shopping_list_repository.save_items(list).await?;

        Ok(PurchaseOutcome { list, inventory })
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn export_text(&self, identity: Identity, list_id: Uuid) -> Result<String, CoreError> {
        let list = self.owned_list(list_id, identity.id()).await?;
        Ok(list.export_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::fakes::{identity, ingredient, test_service},
        ingredient::entities::IngredientCategory,
        inventory::{ports::InventoryService, value_objects::AddToInventoryInput},
    };

    fn item(name: &str, quantity: f64, unit: &str) -> NewShoppingItem {
        NewShoppingItem {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            category: IngredientCategory::Produce,
            recipe_id: None,
            ingredient_id: None,
            emoji: None,
        }
    }

    #[test]
    fn purchase_units_keep_the_item_unit_first_without_duplicates() {
        let item = ShoppingItem {
            id: Uuid::nil(),
            name: "Milk".to_string(),
            quantity: 1.0,
            unit: "cup".to_string(),
            category: IngredientCategory::Dairy,
            checked: false,
            recipe_id: None,
            ingredient_id: None,
            emoji: None,
        };

        assert_eq!(purchase_units(&item), vec!["cup", "piece", "oz"]);
    }

    #[tokio::test]
    async fn creating_a_list_deactivates_the_previous_one() {
        let service = test_service();
        let user = identity();

        let first = service.create_shopping_list(user.clone(), None).await.unwrap();
        assert_eq!(first.name, DEFAULT_LIST_NAME);

        let second = service
            .create_shopping_list(user.clone(), Some("Party".to_string()))
            .await
            .unwrap();

        let active = service.active_shopping_list(user.clone()).await.unwrap().unwrap();
        assert_eq!(active.id, second.id);

        let lists = service.list_shopping_lists(user).await.unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists.iter().filter(|l| l.is_active).count(), 1);
    }

    #[tokio::test]
    async fn item_operations_on_foreign_lists_are_not_found() {
        let service = test_service();
        let owner = identity();
        let list = service.create_shopping_list(owner, None).await.unwrap();

        let err = service
            .add_item(identity(), list.id, item("Lime", 1.0, "piece"))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);

        let err = service.export_text(identity(), list.id).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn add_toggle_clear_and_export() {
        let service = test_service();
        let user = identity();
        let list = service.create_shopping_list(user.clone(), None).await.unwrap();

        service
            .add_item(user.clone(), list.id, item("Lime", 2.0, "piece"))
            .await
            .unwrap();
        let list = service
            .add_item(user.clone(), list.id, item("Cilantro", 1.0, "bunch"))
            .await
            .unwrap();
        assert_eq!(
            service
                .add_item(user.clone(), list.id, item("Salt", 0.0, "tsp"))
                .await
                .unwrap_err(),
            CoreError::InvalidQuantity
        );

        let lime = list.items[0].id;
        service.toggle_item(user.clone(), list.id, lime).await.unwrap();
        assert_eq!(
            service.export_text(user.clone(), list.id).await.unwrap(),
            "- 1 bunch Cilantro"
        );

        let list = service.clear_checked(user.clone(), list.id).await.unwrap();
        assert_eq!(list.items.len(), 1);

        let list = service
            .remove_item(user.clone(), list.id, list.items[0].id)
            .await
            .unwrap();
        assert!(list.items.is_empty());
    }

    #[tokio::test]
    async fn purchase_creates_the_ingredient_and_merges_into_the_fridge() {
        let service = test_service();
        let user = identity();
        let list = service.create_shopping_list(user.clone(), None).await.unwrap();
        let list = service
            .add_item(user.clone(), list.id, item("Fresh Basil", 2.0, "bunch"))
            .await
            .unwrap();
        let item_id = list.items[0].id;

        let outcome = service
            .mark_purchased(user.clone(), list.id, item_id)
            .await
            .unwrap();

        assert!(outcome.list.items[0].checked);
        assert_eq!(outcome.inventory.ingredient.name, "Fresh Basil");
        assert_eq!(outcome.inventory.ingredient.common_units, vec!["bunch", "piece", "oz", "cup"]);
        assert_eq!(outcome.inventory.item.storage_location, StorageLocation::Fridge);
        assert_eq!(outcome.inventory.item.quantity, 2.0);
        assert_eq!(service.ingredient_repository.count(), 1);
    }

    #[tokio::test]
    async fn checked_item_is_not_purchased_twice() {
        let service = test_service();
        let user = identity();
        let list = service.create_shopping_list(user.clone(), None).await.unwrap();
        let list = service
            .add_item(user.clone(), list.id, item("Lime", 2.0, "piece"))
            .await
            .unwrap();
        let item_id = list.items[0].id;

        service
            .mark_purchased(user.clone(), list.id, item_id)
            .await
            .unwrap();
        let err = service
            .mark_purchased(user, list.id, item_id)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
        let rows = service.inventory_repository.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 2.0);
    }

    #[tokio::test]
    async fn purchase_merges_with_existing_stock_by_name() {
        let service = test_service();
        let user = identity();
        let lime = service
            .ingredient_repository
            .insert(ingredient("Lime", IngredientCategory::Produce));
        service
            .add_to_inventory(
                user.clone(),
                AddToInventoryInput {
                    ingredient_id: lime.id,
                    quantity: 3.0,
                    unit: "piece".to_string(),
                    expiration_date: None,
                    storage_location: None,
                },
            )
            .await
            .unwrap();

        let list = service.create_shopping_list(user.clone(), None).await.unwrap();
        let list = service
            .add_item(user.clone(), list.id, item("lime", 2.0, "piece"))
            .await
            .unwrap();

        let outcome = service
            .mark_purchased(user, list.id, list.items[0].id)
            .await
            .unwrap();

        assert_eq!(outcome.inventory.item.quantity, 5.0);
        assert_eq!(service.inventory_repository.rows().len(), 1);
        assert_eq!(service.ingredient_repository.count(), 1);
    }
}
