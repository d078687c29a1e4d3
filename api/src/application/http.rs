pub mod health;
pub mod ingredient;
pub mod inventory;
pub mod pantry;
pub mod recipe;
pub mod server;
pub mod shopping;
pub mod user;
