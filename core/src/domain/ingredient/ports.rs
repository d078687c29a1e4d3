use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{CreateCustomIngredientInput, ImportIngredientInput, SearchIngredientsInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn search_ingredients(
        &self,
        input: SearchIngredientsInput,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn create_custom_ingredient(
        &self,
        identity: Identity,
        input: CreateCustomIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn import_ingredient(
        &self,
        identity: Identity,
        input: ImportIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// Case-insensitive name match or exact alias match, ordered by name.
    fn search(
        &self,
        query: Option<String>,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        ingredient_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Case-insensitive exact name lookup.
    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn find_by_fdc_id(
        &self,
        fdc_id: i32,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}
