use axum::{extract::State, Json};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{RegisterUserRequest, UserResponse};
use crate::methods::routes::ACCOUNT_REGISTER_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = ACCOUNT_REGISTER_PATH,
    tag = "account",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error; every violated rule is listed"),
        (status = 409, description = "Email registered concurrently"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    state
        .account_service
        .register(payload.into())
        .await
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| handle_service_error(e, &state.env, "register_user"))
}
