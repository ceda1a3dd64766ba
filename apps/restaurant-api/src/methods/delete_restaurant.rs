use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};
use uuid::Uuid;

use restaurant_lib::authorization::ActingUser;

use crate::error::{handle_service_error, ApiError};
use crate::methods::routes::RESTAURANTS_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    delete,
    path = RESTAURANTS_BY_ID_PATH,
    tag = "restaurants",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)")
    ),
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 400, description = "Invalid UUID"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Not the creator and not an admin"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_restaurant(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(actor): Extension<ActingUser>,
) -> Result<StatusCode, ApiError> {
    let parsed_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    state
        .restaurant_service
        .delete_restaurant(parsed_id, &actor)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| handle_service_error(e, &state.env, "delete_restaurant"))
}
