pub mod add_item;
pub mod clear_checked;
pub mod create_shopping_list;
pub mod export_shopping_list;
pub mod get_active_shopping_list;
pub mod get_shopping_lists;
pub mod purchase_item;
pub mod remove_item;
pub mod toggle_item;
