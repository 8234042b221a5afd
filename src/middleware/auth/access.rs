//! Bearer token gate: verify the access token, then hand the identity to the
//! route through request extensions.
//!
//! Every failure (no header, bad shape, bad signature, expired) produces the
//! same 401. The specific cause is only logged.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Put every route of `router` behind the bearer gate.
///
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: unknown paths still 404 instead of 401
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match state.auth.authenticate(req.headers()) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "bearer authentication failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(user_id = %claims.subject_id, "bearer authentication succeeded");

    // read back by the AuthClaims extractor
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
