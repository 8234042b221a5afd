//! Stateless bearer-token authentication for HTTP services.
//!
//! - [`services::auth::TokenIssuer`] mints HS256 identity tokens.
//! - [`services::auth::TokenAuthenticator`] verifies them; the axum gate in
//!   [`middleware::auth::access`] runs it in front of protected routes and
//!   attaches the verified [`services::auth::IdentityClaims`] to the request.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
