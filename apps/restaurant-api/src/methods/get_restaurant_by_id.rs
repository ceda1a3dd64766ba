use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::RestaurantResponse;
use crate::methods::routes::RESTAURANTS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = RESTAURANTS_BY_ID_PATH,
    tag = "restaurants",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)")
    ),
    responses(
        (status = 200, description = "The restaurant", body = RestaurantResponse),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_restaurant_by_id(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    let parsed_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .restaurant_service
        .get_restaurant(parsed_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "get_restaurant_by_id"))?
        .map(|restaurant| Json(RestaurantResponse::from(restaurant)))
        .ok_or_else(ApiError::restaurant_not_found)
}
