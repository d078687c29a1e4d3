pub mod ingredients;
pub mod pantry_staples;
pub mod recipes;
pub mod saved_recipes;
pub mod shopping_lists;
pub mod user_inventory;
pub mod user_profiles;
pub mod users;
