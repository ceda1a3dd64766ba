use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::RESTAURANT_DISHES_PATH;
use crate::state::AppState;

#[utoipa::path(
    delete,
    path = RESTAURANT_DISHES_PATH,
    tag = "dishes",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)")
    ),
    responses(
        (status = 204, description = "All dishes of the restaurant deleted"),
        (status = 400, description = "Invalid UUID"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_dishes(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let restaurant_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .dish_service
        .delete_dishes(restaurant_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_dishes"))
}
