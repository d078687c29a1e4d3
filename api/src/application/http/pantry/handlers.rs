pub mod get_pantry_staples;
pub mod toggle_pantry_staple;
