use crate::application::http::{
    ingredient::router::IngredientApiDoc, inventory::router::InventoryApiDoc,
    pantry::router::PantryApiDoc, recipe::router::RecipeApiDoc,
    shopping::router::ShoppingApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hungry Owl API"
    ),
    nest(
        (path = "/me", api = UserApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/pantry-staples", api = PantryApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/shopping-lists", api = ShoppingApiDoc),
    )
)]
pub struct ApiDoc;
