/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - Give handlers the `IdentityClaims` the bearer gate attached to the request
 * - The claims type is the context key: exactly one per request
 */

mod extractor;

pub use extractor::AuthClaims;
