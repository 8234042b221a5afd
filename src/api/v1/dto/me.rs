use serde::Serialize;

use crate::services::auth::IdentityClaims;

/// What the caller's own token says about them.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
    pub username: String,
    pub roles: Vec<String>,
    pub expires_at: i64,
}

impl From<IdentityClaims> for MeResponse {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            user_id: claims.subject_id,
            username: claims.display_name,
            roles: claims.roles,
            expires_at: claims.expires_at,
        }
    }
}
