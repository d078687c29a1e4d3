pub mod add_to_inventory;
pub mod adjust_quantity;
pub mod get_expiring_items;
pub mod get_inventory;
pub mod get_recommendations;
pub mod remove_from_inventory;
pub mod update_inventory_item;
