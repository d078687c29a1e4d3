pub mod create_ingredient;
pub mod import_ingredient;
pub mod search_ingredients;
