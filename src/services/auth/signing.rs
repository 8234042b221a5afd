use std::fmt;

use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningConfigError {
    #[error("signing secret must not be empty")]
    EmptySecret,
}

/// Process-wide signing material: the shared HMAC secret and the lifetime
/// given to newly issued tokens.
///
/// Built once at startup and shared read-only (usually behind an `Arc`).
#[derive(Clone)]
pub struct SigningConfig {
    secret: String,
    default_lifetime: Duration,
}

impl SigningConfig {
    pub fn new(
        secret: impl Into<String>,
        default_lifetime: Duration,
    ) -> Result<Self, SigningConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SigningConfigError::EmptySecret);
        }

        Ok(Self {
            secret,
            default_lifetime,
        })
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn default_lifetime(&self) -> Duration {
        self.default_lifetime
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret", &"<redacted>")
            .field("default_lifetime", &self.default_lifetime)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_secret() {
        let err = SigningConfig::new("", Duration::hours(1)).unwrap_err();
        assert_eq!(err, SigningConfigError::EmptySecret);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = SigningConfig::new("super-secret-value", Duration::hours(1)).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("<redacted>"));
    }
}
