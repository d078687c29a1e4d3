use super::handlers::{
    complete_onboarding::{__path_complete_onboarding, complete_onboarding},
    get_me::{__path_get_me, get_me},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_me, update_profile, complete_onboarding))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/me"), get(get_me))
        .route(&format!("{root_path}/me/profile"), put(update_profile))
        .route(&format!("{root_path}/me/onboarding"), post(complete_onboarding))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
