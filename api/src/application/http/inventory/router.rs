use super::handlers::{
    add_to_inventory::{__path_add_to_inventory, add_to_inventory},
    adjust_quantity::{__path_adjust_quantity, adjust_quantity},
    get_expiring_items::{__path_get_expiring_items, get_expiring_items},
    get_inventory::{__path_get_inventory, get_inventory},
    get_recommendations::{__path_get_recommendations, get_recommendations},
    remove_from_inventory::{__path_remove_from_inventory, remove_from_inventory},
    update_inventory_item::{__path_update_inventory_item, update_inventory_item},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_inventory,
    add_to_inventory,
    update_inventory_item,
    remove_from_inventory,
    adjust_quantity,
    get_expiring_items,
    get_recommendations
))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/inventory"),
            get(get_inventory).post(add_to_inventory),
        )
        .route(
            &format!("{root_path}/inventory/expiring"),
            get(get_expiring_items),
        )
        .route(
            &format!("{root_path}/inventory/recommendations"),
            get(get_recommendations),
        )
        .route(
            &format!("{root_path}/inventory/{{item_id}}"),
            patch(update_inventory_item).delete(remove_from_inventory),
        )
        .route(
            &format!("{root_path}/inventory/{{item_id}}/adjust"),
            post(adjust_quantity),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
