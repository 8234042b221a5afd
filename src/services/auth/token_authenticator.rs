use std::{fmt, sync::Arc};

use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::services::auth::claims::{IdentityClaims, TimeBounded};
use crate::services::auth::clock::{Clock, SystemClock};
use crate::services::auth::signing::SigningConfig;

/// Literal, case-sensitive scheme expected in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// HMAC algorithms a presented token may declare. Anything else is refused
/// before the MAC is even looked at.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Why a request failed authentication.
///
/// Internal diagnostics only: every variant is answered with the same 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is required")]
    MissingHeader,

    #[error("invalid authorization header format")]
    MalformedHeader,

    #[error("token verification failed: {0}")]
    InvalidSignature(#[source] jsonwebtoken::errors::Error),

    #[error("token expired at {expires_at} (now {now})")]
    Expired { expires_at: i64, now: i64 },
}

impl AuthError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
            Self::InvalidSignature(_) => "invalid_signature",
            Self::Expired { .. } => "expired",
        }
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The header must be exactly two space-separated parts, the first being
/// `Bearer`. Lower-case schemes, extra segments and empty tokens are refused.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingHeader)?;

    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Verifies bearer tokens against the shared secret.
///
/// Holds no per-call state: verification is a pure function of the token, the
/// clock reading and the secret, so one instance serves all requests.
#[derive(Clone)]
pub struct TokenAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // DecodingKey wraps the raw secret
        f.debug_struct("TokenAuthenticator")
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}

impl TokenAuthenticator {
    pub fn new(config: &SigningConfig, clock: Arc<dyn Clock>) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        // Expiry is judged against `clock` below, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        // Single issuer, no audience.
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
            clock,
        }
    }

    pub fn with_system_clock(config: &SigningConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Verify signature, algorithm and expiry of a raw token string.
    ///
    /// A token whose payload verifies but does not decode into
    /// [`IdentityClaims`] is reported as `InvalidSignature` as well.
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let data = jsonwebtoken::decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::InvalidSignature)?;
        let claims = data.claims;

        let now = self.clock.now();
        if claims.is_expired_at(now) {
            return Err(AuthError::Expired {
                expires_at: claims.expires_at(),
                now,
            });
        }

        Ok(claims)
    }

    /// Extract + verify in one step.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<IdentityClaims, AuthError> {
        let token = extract_bearer(headers)?;
        self.verify(token)
    }
}
