/*
 * Responsibility
 * - Public surface of the middleware layer
 * - auth: bearer-token gate for protected routes
 * - http: transport concerns applied to every route
 */
pub mod auth;
pub mod http;
