use std::{fmt, sync::Arc};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use thiserror::Error;
use tracing::error;

use crate::services::auth::claims::IdentityClaims;
use crate::services::auth::clock::{Clock, SystemClock};
use crate::services::auth::signing::SigningConfig;

/// Algorithm used for every token this service mints.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Internal failure while producing a token. Never caused by caller input.
#[derive(Debug, Error)]
#[error("failed to sign token: {0}")]
pub struct SigningError(#[from] jsonwebtoken::errors::Error);

/// Mints HS256 identity tokens.
///
/// Stateless apart from the immutable key material; cheap to clone and safe to
/// call from any number of tasks at once.
#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<SigningConfig>,
    clock: Arc<dyn Clock>,
    encoding_key: EncodingKey,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // EncodingKey wraps the raw secret
        f.debug_struct("TokenIssuer")
            .field("config", &self.config)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(config: Arc<SigningConfig>, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret());
        Self {
            config,
            clock,
            encoding_key,
        }
    }

    pub fn with_system_clock(config: Arc<SigningConfig>) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Issue a token valid from now until now + the configured lifetime.
    pub fn issue(
        &self,
        subject_id: impl Into<String>,
        display_name: impl Into<String>,
        roles: Vec<String>,
    ) -> Result<String, SigningError> {
        let claims = IdentityClaims::new(
            subject_id,
            display_name,
            roles,
            self.clock.now(),
            self.config.default_lifetime(),
        );

        self.sign(&claims)
    }

    pub fn sign(&self, claims: &IdentityClaims) -> Result<String, SigningError> {
        sign_claims(&self.encoding_key, claims)
    }
}

/// One-shot issuance against the wall clock.
///
/// Prefer a long-lived [`TokenIssuer`] when issuing repeatedly; this rebuilds
/// the key on every call.
pub fn issue(
    subject_id: &str,
    display_name: &str,
    roles: &[String],
    config: &SigningConfig,
) -> Result<String, SigningError> {
    let claims = IdentityClaims::new(
        subject_id,
        display_name,
        roles.to_vec(),
        SystemClock.now(),
        config.default_lifetime(),
    );

    sign_claims(&EncodingKey::from_secret(config.secret()), &claims)
}

fn sign_claims(key: &EncodingKey, claims: &IdentityClaims) -> Result<String, SigningError> {
    let mut header = Header::new(SIGNING_ALGORITHM);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, key).map_err(|e| {
        error!(error = %e, user_id = %claims.subject_id, "failed to sign token");
        SigningError(e)
    })
}
