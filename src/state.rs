/*
 * Responsibility
 * - Shared context handed to the Router (AppState)
 * - Cheap to clone: everything inside is behind an Arc and never mutated
 */
use std::sync::Arc;

use crate::services::auth::TokenAuthenticator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<TokenAuthenticator>,
}

impl AppState {
    pub fn new(auth: Arc<TokenAuthenticator>) -> Self {
        Self { auth }
    }
}
