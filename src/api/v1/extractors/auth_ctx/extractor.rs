use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::IdentityClaims;

/// Extracts the verified identity placed in request extensions by the gate.
///
/// If the route was mounted without the gate there is nothing to extract and
/// the request is answered with the usual 401.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub IdentityClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityClaims>()
            .cloned()
            .map(AuthClaims)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use chrono::Duration;

    use super::*;

    #[tokio::test]
    async fn reads_claims_from_extensions() {
        let claims = IdentityClaims::new("1", "one", vec!["user".into()], 0, Duration::hours(1));
        let mut req = Request::builder().body(()).unwrap();
        req.extensions_mut().insert(claims.clone());
        let (mut parts, _) = req.into_parts();

        let AuthClaims(got) = AuthClaims::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(got, claims);
    }

    #[tokio::test]
    async fn missing_claims_is_unauthorized() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let rejection = AuthClaims::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
