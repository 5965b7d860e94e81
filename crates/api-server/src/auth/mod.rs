//! Bearer-token identity verification

mod jwt;

pub use jwt::{issue_user_jwt, verify_user_jwt, UserClaims};

use axum::http::HeaderMap;
use uuid::Uuid;

/// Resolve the caller's identity from the Authorization header.
///
/// Every authenticated route calls this before touching any store; there
/// is no anonymous access path.
pub fn resolve_user_identity(headers: &HeaderMap) -> Result<Uuid, String> {
    let header = headers
        .get("Authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;
    let value = header
        .to_str()
        .map_err(|_| "Invalid Authorization header".to_string())?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| "Authorization header must be a bearer token".to_string())?;

    let claims = verify_user_jwt(token)?;
    Uuid::parse_str(&claims.sub).map_err(|_| "Invalid token subject".to_string())
}
