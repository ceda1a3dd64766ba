use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::DishResponse;
use crate::methods::routes::RESTAURANT_DISH_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = RESTAURANT_DISH_BY_ID_PATH,
    tag = "dishes",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)"),
        ("dish_id" = String, Path, description = "Dish ID (UUID)")
    ),
    responses(
        (status = 200, description = "The dish", body = DishResponse),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Restaurant or dish not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_dish_by_id(
    Path((id, dish_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<DishResponse>, ApiError> {
    let restaurant_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;
    let parsed_dish_id = Uuid::parse_str(&dish_id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .dish_service
        .get_dish(restaurant_id, parsed_dish_id)
        .await
        .map(|dish| Json(DishResponse::from(dish)))
        .map_err(|e| handle_service_error(e, &state.env, "get_dish_by_id"))
}
