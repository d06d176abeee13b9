//! Basic authentication for the admin group.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::AdminConfig;
use crate::http::middleware::Interceptor;
use crate::http::response::ErrorMessage;

const DEFAULT_REALM: &str = "Restricted";

/// Decides whether a username/password pair may enter.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn verify(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

/// A single fixed credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Credentials carried by an `Authorization: Basic ...` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse a header value. The scheme is matched case-insensitively.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, encoded) = header.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Encode as an `Authorization` header value.
    pub fn encode(&self) -> String {
        let combined = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(combined))
    }
}

/// Challenges for Basic credentials and only lets verified ones through.
#[derive(Clone)]
pub struct BasicAuth {
    verifier: Arc<dyn CredentialVerifier>,
    challenge: HeaderValue,
}

impl BasicAuth {
    pub fn new(
        realm: &str,
        verifier: impl CredentialVerifier + 'static,
    ) -> Result<Self, header::InvalidHeaderValue> {
        // The stock realm goes out bare; custom ones are quoted.
        let realm = if realm == DEFAULT_REALM {
            realm.to_string()
        } else {
            format!("{realm:?}")
        };
        Ok(Self {
            verifier: Arc::new(verifier),
            challenge: HeaderValue::from_str(&format!("basic realm={realm}"))?,
        })
    }

    pub fn from_config(config: &AdminConfig) -> Result<Self, header::InvalidHeaderValue> {
        Self::new(
            &config.realm,
            StaticCredentials::new(&config.username, &config.password),
        )
    }

    fn unauthorized(&self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, self.challenge.clone())],
            Json(ErrorMessage::for_status(StatusCode::UNAUTHORIZED)),
        )
            .into_response()
    }
}

impl Interceptor for BasicAuth {
    async fn handle(&self, request: Request, next: Next) -> Response {
        let credentials = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(BasicCredentials::parse);

        match credentials {
            Some(creds) if self.verifier.verify(&creds.username, &creds.password) => {
                next.run(request).await
            }
            Some(creds) => {
                tracing::debug!(username = %creds.username, "admin credentials rejected");
                self.unauthorized()
            }
            None => {
                tracing::debug!(path = %request.uri().path(), "admin request without basic credentials");
                self.unauthorized()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_header() {
        let creds = BasicCredentials::parse("Basic bWFyYzoxMjM0").unwrap();
        assert_eq!(creds.username, "marc");
        assert_eq!(creds.password, "1234");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(BasicCredentials::parse("basic bWFyYzoxMjM0").is_some());
        assert!(BasicCredentials::parse("BASIC bWFyYzoxMjM0").is_some());
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = BasicCredentials::parse(
            &BasicCredentials {
                username: "marc".into(),
                password: "a:b:c".into(),
            }
            .encode(),
        )
        .unwrap();
        assert_eq!(creds.password, "a:b:c");
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(BasicCredentials::parse("Bearer abc").is_none());
        assert!(BasicCredentials::parse("Basic").is_none());
        assert!(BasicCredentials::parse("Basic !!!not-base64").is_none());
        // "marc" with no colon
        assert!(BasicCredentials::parse("Basic bWFyYw==").is_none());
    }

    #[test]
    fn static_credentials_need_both_fields() {
        let verifier = StaticCredentials::new("marc", "1234");
        assert!(verifier.verify("marc", "1234"));
        assert!(!verifier.verify("marc", "12345"));
        assert!(!verifier.verify("Marc", "1234"));
        assert!(!verifier.verify("", ""));
    }

    #[test]
    fn closures_are_verifiers() {
        let verifier = |user: &str, _: &str| user == "root";
        assert!(verifier.verify("root", "anything"));
    }

    #[test]
    fn challenge_quotes_custom_realms() {
        let stock = BasicAuth::new("Restricted", StaticCredentials::new("a", "b")).unwrap();
        assert_eq!(stock.challenge, "basic realm=Restricted");

        let custom = BasicAuth::new("Back Office", StaticCredentials::new("a", "b")).unwrap();
        assert_eq!(custom.challenge, "basic realm=\"Back Office\"");
    }
}
