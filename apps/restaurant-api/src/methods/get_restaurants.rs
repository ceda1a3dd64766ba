use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{PaginatedResponse, RestaurantQueryParams, RestaurantResponse};
use crate::methods::routes::RESTAURANTS_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = RESTAURANTS_PATH,
    tag = "restaurants",
    params(RestaurantQueryParams),
    responses(
        (status = 200, description = "A page of restaurants", body = PaginatedResponse<RestaurantResponse>),
        (status = 400, description = "Invalid pagination or sort parameters"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RestaurantQueryParams>,
) -> Result<Json<PaginatedResponse<RestaurantResponse>>, ApiError> {
    state
        .restaurant_service
        .get_restaurants(params.into())
        .await
        .map(|result| Json(PaginatedResponse::from(result)))
        .map_err(|e| handle_service_error(e, &state.env, "get_restaurants"))
}
