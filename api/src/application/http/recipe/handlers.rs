pub mod delete_saved_recipe;
pub mod generate_recipes;
pub mod get_saved_recipes;
pub mod save_recipe;
