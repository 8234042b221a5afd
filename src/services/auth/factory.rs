/// Factory: build the auth services from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{SigningConfig, SigningConfigError, SystemClock, TokenAuthenticator};

pub fn build_signing_config(config: &Config) -> Result<Arc<SigningConfig>, SigningConfigError> {
    let signing = SigningConfig::new(config.jwt_secret.clone(), config.token_lifetime)?;
    Ok(Arc::new(signing))
}

pub fn build_authenticator(signing: &SigningConfig) -> Arc<TokenAuthenticator> {
    Arc::new(TokenAuthenticator::new(signing, Arc::new(SystemClock)))
}
