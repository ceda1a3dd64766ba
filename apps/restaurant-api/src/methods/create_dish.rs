use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{CreateDishRequest, DishResponse};
use crate::methods::routes::{API_V1_PREFIX, RESTAURANT_DISHES_PATH};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = RESTAURANT_DISHES_PATH,
    tag = "dishes",
    params(
        ("id" = String, Path, description = "Restaurant ID (UUID)")
    ),
    request_body = CreateDishRequest,
    responses(
        (status = 201, description = "Dish created", body = DishResponse),
        (status = 400, description = "Invalid UUID or validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_dish(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CreateDishRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurant_id = Uuid::parse_str(&id).map_err(|_| ApiError::invalid_uuid())?;

    let dish = state
        .dish_service
        .create_dish(restaurant_id, payload.into())
        .await
        .map_err(|e| handle_service_error(e, &state.env, "create_dish"))?;

    let location = format!(
        "{}/restaurants/{}/dishes/{}",
        API_V1_PREFIX, restaurant_id, dish.id
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DishResponse::from(dish)),
    ))
}
