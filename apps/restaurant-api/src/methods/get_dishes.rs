use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::DishResponse;
use crate::methods::routes::RESTAURANT_DISHES_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = RESTAURANT_DISHES_PATH,
    tag = "dishes",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)")
    ),
    responses(
        (status = 200, description = "Dishes of the restaurant", body = [DishResponse]),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_dishes(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<DishResponse>>, ApiError> {
    let restaurant_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .dish_service
        .get_dishes(restaurant_id)
        .await
        .map(|dishes| Json(dishes.into_iter().map(DishResponse::from).collect()))
        .map_err(|e| handle_service_error(e, &state.env, "get_dishes"))
}
