use axum::{extract::State, Json};

use crate::error::{handle_service_error, ApiError};
use crate::methods::entities::{LoginRequest, LoginResponse};
use crate::methods::routes::ACCOUNT_LOGIN_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = ACCOUNT_LOGIN_PATH,
    tag = "account",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token issued", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    state
        .account_service
        .login(&payload.email, &payload.password)
        .await
        .map(|token| Json(LoginResponse { token }))
        .map_err(|e| handle_service_error(e, &state.env, "login_user"))
}
