use super::handlers::{
    delete_saved_recipe::{__path_delete_saved_recipe, delete_saved_recipe},
    generate_recipes::{__path_generate_recipes, generate_recipes},
    get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, get_saved_recipes, save_recipe, delete_saved_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recipes/generate"),
            post(generate_recipes),
        )
        .route(
            &format!("{root_path}/recipes/saved"),
            get(get_saved_recipes).post(save_recipe),
        )
        .route(
            &format!("{root_path}/recipes/saved/{{recipe_id}}"),
            delete(delete_saved_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
