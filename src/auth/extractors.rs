use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Extracts the bearer token, verifies it and yields the user id. The
/// binding lives only for the request being handled.
pub struct AuthUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("No token provided".into()))?;

        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("No token provided".into()))?;

        let keys = JwtKeys::from_ref(state);
        let user_id = keys
            .verify(token)
            .ok_or_else(|| ApiError::Unauthorized("Invalid token".into()))?;

        Ok(AuthUser(user_id))
    }
}
