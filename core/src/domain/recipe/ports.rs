use std::{future::Future, time::Duration};

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GeneratedRecipe, Recipe, SavedRecipe},
        value_objects::GenerateRecipesInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Suggestions sorted by how much of each recipe the user already has.
    fn generate_recipes(
        &self,
        identity: Identity,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;

    fn save_recipe(
        &self,
        identity: Identity,
        recipe: GeneratedRecipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn list_saved_recipes(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    fn delete_saved_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Persist the recipe and link it to its owner in one transaction.
    fn save_for_user(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    /// Newest first.
    fn list_saved(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    /// Returns false when the user has no such saved recipe.
    fn delete_saved(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn recent_recipe_names(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// String cache with per-entry expiry.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCache: Send + Sync {
    fn get(&self, key: String) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(
        &self,
        key: String,
        value: String,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
