use axum::extract::{Path, State};
use hungry_owl_core::domain::shopping::ports::ShoppingListService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    get,
    path = "/{list_id}/export",
    tag = "shopping",
    summary = "Export shopping list",
    description = "Unchecked items as plain text, one `- {quantity} {unit} {name}` line each.",
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
    responses(
        (status = 200, body = String, content_type = "text/plain"),
        (status = 404, description = "List not found")
    )
)]
pub async fn export_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<String, ApiError> {
    state
        .service
        .export_text(identity, list_id)
        .await
        .map_err(ApiError::from)
}
