use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use restaurant_lib::authorization::ActingUser;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RestaurantResponse, UpdateRestaurantRequest};
use crate::methods::routes::RESTAURANTS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    put,
    path = RESTAURANTS_BY_ID_PATH,
    tag = "restaurants",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)")
    ),
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Restaurant updated", body = RestaurantResponse),
        (status = 400, description = "Invalid UUID or validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the creator and not an admin"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_restaurant(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(actor): Extension<ActingUser>,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    let parsed_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .restaurant_service
        .update_restaurant(parsed_id, payload.into(), &actor)
        .await
        .map(|restaurant| Json(RestaurantResponse::from(restaurant)))
        .map_err(|e| handle_service_error(e, &state.env, "update_restaurant"))
}
