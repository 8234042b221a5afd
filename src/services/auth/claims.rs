use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize};

/// Minimal time capability a signed token payload has to provide.
///
/// This is deliberately narrower than a general JWT claim set: no issuer,
/// audience or not-before. The authenticator only ever asks these two things.
pub trait TimeBounded {
    fn issued_at(&self) -> i64;
    fn expires_at(&self) -> i64;

    /// Expired as soon as `now` reaches `expires_at` (no leeway).
    fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at()
    }
}

/// Identity payload carried inside a token.
///
/// Wire names (`user_id`, `username`, `iat`, `exp`) are kept stable so tokens
/// stay interchangeable with other HS-signed issuers sharing the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    #[serde(rename = "user_id")]
    pub subject_id: String,
    #[serde(rename = "username")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles: Vec<String>,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl IdentityClaims {
    pub fn new(
        subject_id: impl Into<String>,
        display_name: impl Into<String>,
        roles: Vec<String>,
        issued_at: i64,
        lifetime: Duration,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            display_name: display_name.into(),
            roles,
            issued_at,
            expires_at: issued_at + lifetime.num_seconds(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl TimeBounded for IdentityClaims {
    fn issued_at(&self) -> i64 {
        self.issued_at
    }

    fn expires_at(&self) -> i64 {
        self.expires_at
    }
}

// Some issuers encode an empty role list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lifetime: Duration) -> IdentityClaims {
        IdentityClaims::new("123", "testuser", vec!["user".into()], 1_700_000_000, lifetime)
    }

    #[test]
    fn expiry_is_issue_time_plus_lifetime() {
        let claims = sample(Duration::hours(1));
        assert_eq!(claims.expires_at, 1_700_000_000 + 3600);
        assert!(claims.expires_at > claims.issued_at);
    }

    #[test]
    fn expired_exactly_at_expiry_instant() {
        let claims = sample(Duration::hours(1));
        assert!(!claims.is_expired_at(claims.expires_at - 1));
        assert!(claims.is_expired_at(claims.expires_at));
        assert!(claims.is_expired_at(claims.expires_at + 1));
    }

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(sample(Duration::hours(1))).unwrap();
        assert_eq!(value["user_id"], "123");
        assert_eq!(value["username"], "testuser");
        assert_eq!(value["roles"], serde_json::json!(["user"]));
        assert_eq!(value["iat"], 1_700_000_000);
        assert_eq!(value["exp"], 1_700_003_600);
    }

    #[test]
    fn null_roles_decode_as_empty() {
        let json = r#"{"user_id":"7","username":"x","roles":null,"iat":1,"exp":2}"#;
        let claims: IdentityClaims = serde_json::from_str(json).unwrap();
        assert!(claims.roles.is_empty());

        let json = r#"{"user_id":"7","username":"x","iat":1,"exp":2}"#;
        let claims: IdentityClaims = serde_json::from_str(json).unwrap();
        assert!(claims.roles.is_empty());
    }

    #[test]
    fn has_role_matches_exactly() {
        let claims = sample(Duration::hours(1));
        assert!(claims.has_role("user"));
        assert!(!claims.has_role("User"));
        assert!(!claims.has_role("admin"));
    }
}
