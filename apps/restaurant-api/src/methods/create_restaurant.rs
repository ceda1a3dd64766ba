use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};

use restaurant_lib::authorization::ActingUser;

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{CreateRestaurantRequest, RestaurantResponse};
use crate::methods::routes::{API_V1_PREFIX, RESTAURANTS_PATH};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = RESTAURANTS_PATH,
    tag = "restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = RestaurantResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Extension(actor): Extension<ActingUser>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurant = state
        .restaurant_service
        .create_restaurant(payload.into(), actor.user_id)
        .await
        .map_err(|e| handle_service_error(e, &state.env, "create_restaurant"))?;

    let location = format!("{}{}/{}", API_V1_PREFIX, RESTAURANTS_PATH, restaurant.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RestaurantResponse::from(restaurant)),
    ))
}
