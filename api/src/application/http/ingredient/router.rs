use super::handlers::{
    create_ingredient::{__path_create_ingredient, create_ingredient},
    import_ingredient::{__path_import_ingredient, import_ingredient},
    search_ingredients::{__path_search_ingredients, search_ingredients},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_ingredients, create_ingredient, import_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/ingredients"),
            get(search_ingredients).post(create_ingredient),
        )
        .route(
            &format!("{root_path}/ingredients/import"),
            post(import_ingredient),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
