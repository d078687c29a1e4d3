use super::handlers::{
    get_pantry_staples::{__path_get_pantry_staples, get_pantry_staples},
    toggle_pantry_staple::{__path_toggle_pantry_staple, toggle_pantry_staple},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_pantry_staples, toggle_pantry_staple))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/pantry-staples"),
            get(get_pantry_staples),
        )
        .route(
            &format!("{root_path}/pantry-staples/{{ingredient_id}}"),
            put(toggle_pantry_staple),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
