//! The in-memory credential session
//!
//! A [`Session`] is created by a successful `authenticate` call and replaced
//! wholesale by the next one. It is never mutated in place; request building
//! only reads it.

use crate::{Locale, Region};
use serde::Deserialize;
use std::time::{Duration, SystemTime};

/// Body of a successful OAuth client-credentials token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer credential
    pub access_token: String,
    /// Token type as declared by the server (always `bearer` in practice)
    #[serde(default)]
    pub token_type: String,
    /// Token lifetime in seconds, relative to issuance
    pub expires_in: u64,
}

/// The active credential session: region, locale, token, and token lifetime
#[derive(Debug, Clone)]
pub struct Session {
    region: Region,
    locale: Locale,
    token: String,
    issued_at: SystemTime,
    expires_at: SystemTime,
}

impl Session {
    /// Build a session from a token response issued at `issued_at`
    pub(crate) fn new(
        region: Region,
        locale: Locale,
        token: TokenResponse,
        issued_at: SystemTime,
    ) -> Self {
        Self {
            region,
            locale,
            token: token.access_token,
            issued_at,
            expires_at: issued_at + Duration::from_secs(token.expires_in),
        }
    }

    /// Region this session was authenticated against
    pub fn region(&self) -> Region {
        self.region
    }

    /// Locale injected into every request built with this session
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The access token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When the token was issued
    pub fn issued_at(&self) -> SystemTime {
        self.issued_at
    }

    /// Absolute deadline after which the server will reject the token
    pub fn expires_at(&self) -> SystemTime {
        self.expires_at
    }

    /// Whether the token lifetime has elapsed
    ///
    /// Informational only: the gateway still sends an expired token as-is
    /// and lets the server reject it. Callers wanting proactive renewal can
    /// poll this and re-authenticate.
    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_in: u64) -> TokenResponse {
        TokenResponse {
            access_token: "T".to_string(),
            token_type: "bearer".to_string(),
            expires_in,
        }
    }

    #[test]
    fn test_expiry_deadline_is_absolute() {
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let session = Session::new(Region::EU, Locale::EnGb, token(3600), t0);

        assert_eq!(session.token(), "T");
        assert_eq!(session.issued_at(), t0);
        assert_eq!(session.expires_at(), t0 + Duration::from_secs(3600));
    }

    #[test]
    fn test_is_expired() {
        let now = SystemTime::now();
        let live = Session::new(Region::US, Locale::EnUs, token(3600), now);
        assert!(!live.is_expired());

        let stale = Session::new(
            Region::US,
            Locale::EnUs,
            token(3600),
            now - Duration::from_secs(7200),
        );
        assert!(stale.is_expired());
    }

    #[test]
    fn test_token_response_deserialization() {
        let body = r#"{"access_token":"ABCDEF","token_type":"bearer","expires_in":86399}"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "ABCDEF");
        assert_eq!(parsed.expires_in, 86399);
    }

    #[test]
    fn test_token_response_tolerates_missing_token_type() {
        let body = r#"{"access_token":"X","expires_in":60}"#;
        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.token_type, "");
    }
}
