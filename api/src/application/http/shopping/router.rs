use super::handlers::{
    add_item::{__path_add_item, add_item},
    clear_checked::{__path_clear_checked, clear_checked},
    create_shopping_list::{__path_create_shopping_list, create_shopping_list},
    export_shopping_list::{__path_export_shopping_list, export_shopping_list},
    get_active_shopping_list::{__path_get_active_shopping_list, get_active_shopping_list},
    get_shopping_lists::{__path_get_shopping_lists, get_shopping_lists},
    purchase_item::{__path_purchase_item, purchase_item},
    remove_item::{__path_remove_item, remove_item},
    toggle_item::{__path_toggle_item, toggle_item},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_shopping_lists,
    create_shopping_list,
    get_active_shopping_list,
    add_item,
    toggle_item,
    purchase_item,
    remove_item,
    clear_checked,
    export_shopping_list
))]
pub struct ShoppingApiDoc;

pub fn shopping_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/shopping-lists"),
            get(get_shopping_lists).post(create_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/active"),
            get(get_active_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/items"),
            post(add_item),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/items/{{item_id}}"),
            delete(remove_item),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/items/{{item_id}}/toggle"),
            post(toggle_item),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/items/{{item_id}}/purchase"),
            post(purchase_item),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/clear-checked"),
            post(clear_checked),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{list_id}}/export"),
            get(export_shopping_list),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
