use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::{DEFAULT_CUSTOM_UNITS, Ingredient, IngredientConfig},
        ports::{IngredientRepository, IngredientService},
        value_objects::{
            CreateCustomIngredientInput, DEFAULT_BROWSE_LIMIT, DEFAULT_SEARCH_LIMIT,
            ImportIngredientInput, MIN_SEARCH_LENGTH, SearchIngredientsInput,
        },
    },
    inventory::ports::InventoryRepository,
    pantry::ports::PantryRepository,
    recipe::ports::{LLMClient, RecipeCache, RecipeRepository},
    shopping::ports::ShoppingListRepository,
    user::ports::UserRepository,
};

fn clean_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid("ingredient name is required".to_string()));
    }
    Ok(name.to_string())
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
    /// Existing ingredient with this name, or a new one built from `config`.
    ///
    /// The emoji falls back to the catalog when `config` has none.
    pub(crate) async fn find_or_create_ingredient(
        &self,
        mut config: IngredientConfig,
    ) -> Result<Ingredient, CoreError> {
        if let Some(existing) = self
            .ingredient_repository
            .find_by_name(config.name.clone())
            .await?
        {
            return Ok(existing);
        }

        if config.emoji.is_none() {
            config.emoji = Some(
                self.settings
                    .emoji_catalog
                    .emoji_for(&config.name, config.category)
                    .to_string(),
            );
        }

        let ingredient = self.ingredient_repository.create(Ingredient::new(config)).await?;
        tracing::info!(ingredient_id = %ingredient.id, name = %ingredient.name, "created ingredient");

        Ok(ingredient)
    }
}

impl<I, INV, P, U, S, R, LLM, C> IngredientService for Service<I, INV, P, U, S, R, LLM, C>
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
    #[instrument(skip(self))]
    async fn search_ingredients(
        &self,
        input: SearchIngredientsInput,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let query = input
            .query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        let limit = match (&query, input.limit) {
            (_, Some(limit)) => limit,
            (Some(_), None) => DEFAULT_SEARCH_LIMIT,
            (None, None) => DEFAULT_BROWSE_LIMIT,
        };

        if let Some(q) = &query
            && q.chars().count() < MIN_SEARCH_LENGTH
        {
            return Ok(Vec::new());
        }

        self.ingredient_repository.search(query, limit).await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), name = %input.name))]
    async fn create_custom_ingredient(
        &self,
        identity: Identity,
        input: CreateCustomIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        let name = clean_name(&input.name)?;

        self.find_or_create_ingredient(IngredientConfig {
            name,
            category: input.category,
            aliases: Vec::new(),
            common_units: DEFAULT_CUSTOM_UNITS.iter().map(|u| u.to_string()).collect(),
            emoji: input.emoji.filter(|e| !e.trim().is_empty()),
            shelf_life_days: None,
            usda_fdc_id: None,
            description: input.description,
        })
        .await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), name = %input.name))]
    async fn import_ingredient(
        &self,
        identity: Identity,
        input: ImportIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        let name = clean_name(&input.name)?;

        if let Some(fdc_id) = input.fdc_id
            && let Some(existing) = self.ingredient_repository.find_by_fdc_id(fdc_id).await?
        {
            return Ok(existing);
        }

        let common_units = if input.common_units.is_empty() {
            DEFAULT_CUSTOM_UNITS.iter().map(|u| u.to_string()).collect()
        } else {
            input.common_units
        };

        self.find_or_create_ingredient(IngredientConfig {
            name,
            category: input.category,
            aliases: Vec::new(),
            common_units,
            emoji: input.emoji.filter(|e| !e.trim().is_empty()),
            shelf_life_days: None,
            usda_fdc_id: input.fdc_id,
            description: None,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::fakes::{identity, ingredient, test_service},
        ingredient::entities::IngredientCategory,
    };

    #[tokio::test]
    async fn short_queries_return_nothing() {
        let service = test_service();
        service
            .ingredient_repository
            .insert(ingredient("Egg", IngredientCategory::Protein));

        let found = service
            .search_ingredients(SearchIngredientsInput {
                query: Some("e".to_string()),
                limit: None,
            })
            .await
            .unwrap();
        assert!(found.is_empty());

        let found = service
            .search_ingredients(SearchIngredientsInput {
                query: Some("EG".to_string()),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn browsing_is_ordered_and_limited() {
        let service = test_service();
        for name in ["Rice", "Apple", "Milk"] {
            service
                .ingredient_repository
                .insert(ingredient(name, IngredientCategory::Other));
        }

        let found = service
            .search_ingredients(SearchIngredientsInput {
                query: None,
                limit: Some(2),
            })
            .await
            .unwrap();
        let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Milk"]);
    }

    #[tokio::test]
    async fn custom_ingredient_dedupes_by_name() {
        let service = test_service();
        let existing = service
            .ingredient_repository
            .insert(ingredient("Gochujang", IngredientCategory::Pantry));

        let found = service
            .create_custom_ingredient(
                identity(),
                CreateCustomIngredientInput {
                    name: "  gochujang ".to_string(),
                    description: None,
                    category: IngredientCategory::Pantry,
                    emoji: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(found.id, existing.id);
        assert_eq!(service.ingredient_repository.count(), 1);
    }

    #[tokio::test]
    async fn custom_ingredient_gets_default_units_and_emoji() {
        let service = test_service();

        let created = service
            .create_custom_ingredient(
                identity(),
                CreateCustomIngredientInput {
                    name: "Smoked Salmon".to_string(),
                    description: Some("cold smoked".to_string()),
                    category: IngredientCategory::Protein,
                    emoji: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.common_units, vec!["piece", "oz", "cup", "lb"]);
        assert_eq!(created.emoji.as_deref(), Some("🐟"));
        assert_eq!(created.description.as_deref(), Some("cold smoked"));

        let err = service
            .create_custom_ingredient(
                identity(),
                CreateCustomIngredientInput {
                    name: "   ".to_string(),
                    description: None,
                    category: IngredientCategory::Other,
                    emoji: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn import_dedupes_by_fdc_id() {
        let service = test_service();
        let input = ImportIngredientInput {
            name: "Kale, raw".to_string(),
            category: IngredientCategory::Produce,
            common_units: vec!["cup".to_string()],
            emoji: Some("🥬".to_string()),
            fdc_id: Some(168421),
        };

        let first = service.import_ingredient(identity(), input.clone()).await.unwrap();
        let second = service
            .import_ingredient(
                identity(),
                ImportIngredientInput {
                    name: "Kale".to_string(),
                    ..input
                },
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.common_units, vec!["cup"]);
        assert_eq!(first.usda_fdc_id, Some(168421));
    }
}
