pub mod cache;
pub mod db;
pub mod ingredient;
pub mod inventory;
pub mod llm;
pub mod pantry;
pub mod recipe;
pub mod shopping;
pub mod user;
