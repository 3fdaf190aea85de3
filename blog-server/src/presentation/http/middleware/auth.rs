use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::presentation::AppState;
use crate::presentation::http::app_error::AppError;

#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) user_id: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

pub(crate) async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let token = extract_token(auth_header).ok_or(AppError::Unauthorized)?;

    let user_id = state.jwt.verify_token(token).map_err(|err| {
        debug!(error = %err, "rejected access token");
        AppError::Unauthorized
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// `Bearer <token>` or a bare token.
fn extract_token(raw: &str) -> Option<&str> {
    let mut parts = raw.split_whitespace();
    let first = parts.next()?;

    match (parts.next(), parts.next()) {
        (None, _) if !first.eq_ignore_ascii_case("bearer") => Some(first),
        (Some(token), None) if first.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::extract_token;

    #[test]
    fn extract_token_accepts_bearer_scheme() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("bearer   abc.def.ghi "), Some("abc.def.ghi"));
    }

    #[test]
    fn extract_token_accepts_bare_token() {
        assert_eq!(extract_token("abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn extract_token_rejects_empty_and_malformed_headers() {
        assert_eq!(extract_token(""), None);
        assert_eq!(extract_token("   "), None);
        assert_eq!(extract_token("Bearer"), None);
        assert_eq!(extract_token("Basic abc"), None);
        assert_eq!(extract_token("Bearer a b"), None);
    }
}
