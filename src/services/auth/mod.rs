pub mod claims;
pub mod clock;
pub mod factory;
pub mod signing;
pub mod token_authenticator;
pub mod token_issuer;

pub use claims::{IdentityClaims, TimeBounded};
pub use clock::{Clock, ManualClock, SystemClock};
pub use factory::{build_authenticator, build_signing_config};
pub use signing::{SigningConfig, SigningConfigError};
pub use token_authenticator::{AuthError, TokenAuthenticator, extract_bearer};
pub use token_issuer::{SigningError, TokenIssuer, issue};
