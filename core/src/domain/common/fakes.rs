//! In-memory port implementations for service tests.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        services::{Service, ServiceSettings},
    },
    ingredient::{
        entities::{Ingredient, IngredientCategory, IngredientConfig},
        ports::IngredientRepository,
    },
    inventory::{
        entities::InventoryItem,
        merge::{QuantityChange, apply_delta, merge_into},
        ports::InventoryRepository,
        value_objects::{InventoryUpsert, QuantityAdjustment, UpsertOutcome},
    },
    pantry::{entities::PantryStaple, ports::PantryRepository},
    recipe::{
        entities::{Recipe, SavedRecipe},
        ports::{LLMClient, RecipeCache, RecipeRepository},
    },
    shopping::{entities::ShoppingList, ports::ShoppingListRepository},
    user::{
        entities::{User, UserProfile},
        ports::UserRepository,
    },
};

pub type TestService = Service<
    FakeIngredients,
    FakeInventory,
    FakePantry,
    FakeUsers,
    FakeShoppingLists,
    FakeRecipes,
    FakeLLM,
    FakeCache,
>;

pub fn test_service() -> TestService {
    Service::new(
        FakeIngredients::default(),
        FakeInventory::default(),
        FakePantry::default(),
        FakeUsers::default(),
        FakeShoppingLists::default(),
        FakeRecipes::default(),
        FakeLLM::default(),
        FakeCache::default(),
        ServiceSettings::default(),
    )
}

pub fn identity() -> Identity {
    Identity::new(Uuid::new_v4(), "user_test")
}

pub fn ingredient(name: &str, category: IngredientCategory) -> Ingredient {
    Ingredient::new(IngredientConfig {
        name: name.to_string(),
        category,
        aliases: Vec::new(),
        common_units: vec!["piece".to_string()],
        emoji: None,
        shelf_life_days: None,
        usda_fdc_id: None,
        description: None,
    })
}

#[derive(Default)]
pub struct FakeIngredients {
    pub ingredients: Mutex<Vec<Ingredient>>,
}

impl FakeIngredients {
    pub fn insert(&self, ingredient: Ingredient) -> Ingredient {
        self.ingredients.lock().unwrap().push(ingredient.clone());
        ingredient
    }

    pub fn count(&self) -> usize {
        self.ingredients.lock().unwrap().len()
    }
}

impl IngredientRepository for FakeIngredients {
    async fn search(&self, query: Option<String>, limit: u64) -> Result<Vec<Ingredient>, CoreError> {
        let mut found: Vec<Ingredient> = self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .filter(|i| match &query {
                Some(q) => i.name.to_lowercase().contains(q) || i.aliases.contains(q),
                None => true,
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        Ok(self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == ingredient_id)
            .cloned())
    }

    async fn get_by_ids(&self, ingredient_ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        Ok(self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .filter(|i| ingredient_ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        Ok(self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(&name))
            .cloned())
    }

    async fn find_by_fdc_id(&self, fdc_id: i32) -> Result<Option<Ingredient>, CoreError> {
        Ok(self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.usda_fdc_id == Some(fdc_id))
            .cloned())
    }

    async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        Ok(self.insert(ingredient))
    }
}

#[derive(Default)]
pub struct FakeInventory {
    pub items: Mutex<Vec<InventoryItem>>,
}

impl FakeInventory {
    pub fn rows(&self) -> Vec<InventoryItem> {
        self.items.lock().unwrap().clone()
    }
}

impl InventoryRepository for FakeInventory {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<InventoryItem>, CoreError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, item_id: Uuid, user_id: Uuid) -> Result<Option<InventoryItem>, CoreError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == item_id && item.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, upsert: InventoryUpsert) -> Result<UpsertOutcome, CoreError> {
        // Holding the lock for the whole read-modify-write mirrors the
        // single-statement upsert of the database adapter.
        let mut items = self.items.lock().unwrap();
        let position = items.iter().position(|item| {
            item.user_id == upsert.user_id
                && item.ingredient_id == upsert.ingredient_id
                && item.storage_location == upsert.storage_location
        });

        match position {
            Some(index) => {
                let merged = merge_into(Some(items[index].clone()), &upsert, Utc::now());
                items[index] = merged.clone();
                Ok(UpsertOutcome {
                    item: merged,
                    merged: true,
                })
            }
            None => {
                let created = merge_into(None, &upsert, Utc::now());
                items.push(created.clone());
                Ok(UpsertOutcome {
                    item: created,
                    merged: false,
                })
            }
        }
    }

    async fn apply_quantity_delta(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        delta: f64,
    ) -> Result<Option<QuantityAdjustment>, CoreError> {
        let mut items = self.items.lock().unwrap();
        let Some(index) = items
            .iter()
            .position(|item| item.id == item_id && item.user_id == user_id)
        else {
            return Ok(None);
        };

        match apply_delta(items[index].quantity, delta) {
            QuantityChange::Set(quantity) => {
                items[index].quantity = quantity;
                Ok(Some(QuantityAdjustment::Updated {
                    item: items[index].clone(),
                }))
            }
            QuantityChange::Remove => {
                items.remove(index);
                Ok(Some(QuantityAdjustment::Removed { item_id }))
            }
        }
    }

    async fn update_item(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
        let mut items = self.items.lock().unwrap();
        let stored = items
            .iter_mut()
            .find(|stored| stored.id == item.id)
            .ok_or(CoreError::NotFound)?;
        *stored = item.clone();
        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| !(item.id == item_id && item.user_id == user_id));
        Ok(items.len() != before)
    }
}

#[derive(Default)]
pub struct FakePantry {
    pub staples: Mutex<Vec<PantryStaple>>,
}

impl PantryRepository for FakePantry {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PantryStaple>, CoreError> {
        Ok(self
            .staples
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn set_in_stock(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        in_stock: bool,
    ) -> Result<PantryStaple, CoreError> {
        let mut staples = self.staples.lock().unwrap();
        if let Some(staple) = staples
            .iter_mut()
            .find(|s| s.user_id == user_id && s.ingredient_id == ingredient_id)
        {
            staple.in_stock = in_stock;
            return Ok(staple.clone());
        }

        let staple = PantryStaple::new(user_id, ingredient_id, in_stock);
        staples.push(staple.clone());
        Ok(staple)
    }
}

#[derive(Default)]
pub struct FakeUsers {
    pub users: Mutex<Vec<User>>,
    pub profiles: Mutex<HashMap<Uuid, UserProfile>>,
}

impl UserRepository for FakeUsers {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn get_by_external_id(&self, external_id: String) -> Result<Option<User>, CoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.external_id == user.external_id) {
            return Ok(existing.clone());
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn set_onboarding_complete(&self, user_id: Uuid) -> Result<User, CoreError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(CoreError::NotFound)?;
        user.onboarding_complete = true;
        Ok(user.clone())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

#[derive(Default)]
pub struct FakeShoppingLists {
    pub lists: Mutex<Vec<ShoppingList>>,
}

impl ShoppingListRepository for FakeShoppingLists {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, CoreError> {
        let mut lists: Vec<ShoppingList> = self
            .lists
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(lists)
    }

    async fn get_active(&self, user_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.user_id == user_id && l.is_active)
            .cloned())
    }

    async fn get_by_id(&self, list_id: Uuid, user_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == list_id && l.user_id == user_id)
            .cloned())
    }

    async fn create_active(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let mut lists = self.lists.lock().unwrap();
        for other in lists.iter_mut().filter(|l| l.user_id == list.user_id) {
            other.is_active = false;
        }
        lists.push(list.clone());
        Ok(list)
    }

    async fn save_items(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let mut lists = self.lists.lock().unwrap();
        let stored = lists
            .iter_mut()
            .find(|l| l.id == list.id)
            .ok_or(CoreError::NotFound)?;
        stored.items = list.items.clone();
        stored.updated_at = list.updated_at;
        Ok(stored.clone())
    }
}

#[derive(Default)]
pub struct FakeRecipes {
    pub saved: Mutex<Vec<SavedRecipe>>,
}

impl RecipeRepository for FakeRecipes {
    async fn save_for_user(&self, recipe: Recipe) -> Result<SavedRecipe, CoreError> {
        let saved = SavedRecipe::new(recipe);
        self.saved.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn list_saved(&self, user_id: Uuid) -> Result<Vec<SavedRecipe>, CoreError> {
        // Inserted in chronological order.
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_saved(&self, user_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        let mut saved = self.saved.lock().unwrap();
        let before = saved.len();
        saved.retain(|s| !(s.user_id == user_id && s.recipe.id == recipe_id));
        Ok(saved.len() != before)
    }

    async fn recent_recipe_names(&self, user_id: Uuid, limit: u64) -> Result<Vec<String>, CoreError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|s| s.user_id == user_id)
            .take(limit as usize)
            .map(|s| s.recipe.content.name.clone())
            .collect())
    }
}

/// Replays a canned reply and records every prompt.
#[derive(Default)]
pub struct FakeLLM {
    pub reply: Mutex<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeLLM {
    pub fn set_reply(&self, reply: impl Into<String>) {
        *self.reply.lock().unwrap() = reply.into();
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl LLMClient for FakeLLM {
    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.prompts.lock().unwrap().push(prompt);
        Ok(self.reply.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct FakeCache {
    pub entries: Mutex<HashMap<String, String>>,
    pub ttls: Mutex<Vec<Duration>>,
    pub broken: AtomicBool,
    pub reads: AtomicUsize,
}

impl RecipeCache for FakeCache {
    async fn get(&self, key: String) -> Result<Option<String>, CoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.broken.load(Ordering::SeqCst) {
            return Err(CoreError::InternalServerError);
        }
        Ok(self.entries.lock().unwrap().get(&key).cloned())
    }

    async fn set(&self, key: String, value: String, ttl: Duration) -> Result<(), CoreError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(CoreError::InternalServerError);
        }
        self.ttls.lock().unwrap().push(ttl);
        self.entries.lock().unwrap().insert(key, value);
        Ok(())
    }
}
