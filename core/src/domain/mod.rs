pub mod authentication;
pub mod common;
pub mod ingredient;
pub mod inventory;
pub mod matching;
pub mod pantry;
pub mod recipe;
pub mod shopping;
pub mod user;
