use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
    Extension,
};

use restaurant_lib::auth::JwtAuth;
use restaurant_lib::authorization::ActingUser;

use crate::error::ApiError;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Require a valid bearer token and expose the verified identity to the
/// handler as an `ActingUser` request extension.
pub async fn require_auth(
    Extension(jwt): Extension<Arc<JwtAuth>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let claims = jwt
        .verify(token)
        .map_err(|_| ApiError::Unauthorized("invalid or expired token".to_string()))?;

    request.extensions_mut().insert(ActingUser::from(claims));
    Ok(next.run(request).await)
}
