//! HTTP basic authentication against a single shared credential.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::password::{hash_password, verify_password};

/// The shared credential guarding the notes API.
///
/// Only an Argon2id hash of the password is kept.
#[derive(Debug, Clone)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password_hash: String,
}

/// Username and password decoded from a `Basic` authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl BasicAuthConfig {
    /// Build a config from a plaintext password, hashing it.
    ///
    /// # Panics
    ///
    /// Panics if the password cannot be hashed.
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        let password_hash = hash_password(password).expect("Failed to hash basic auth password");
        Self {
            username: username.into(),
            password_hash,
        }
    }

    /// Load the credential from environment variables.
    ///
    /// | Env Var               | Required |
    /// |-----------------------|----------|
    /// | `BASIC_AUTH_USERNAME` | **yes**  |
    /// | `BASIC_AUTH_PASSWORD` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if either variable is not set or is empty.
    pub fn from_env() -> Self {
        let username = std::env::var("BASIC_AUTH_USERNAME")
            .expect("BASIC_AUTH_USERNAME must be set in the environment");
        assert!(!username.is_empty(), "BASIC_AUTH_USERNAME must not be empty");

        let password = std::env::var("BASIC_AUTH_PASSWORD")
            .expect("BASIC_AUTH_PASSWORD must be set in the environment");
        assert!(!password.is_empty(), "BASIC_AUTH_PASSWORD must not be empty");

        Self::new(username, &password)
    }

    /// Check decoded credentials against the configured user.
    pub fn verify(&self, credentials: &Credentials) -> bool {
        if credentials.username != self.username {
            return false;
        }
        match verify_password(&credentials.password, &self.password_hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "Stored basic auth hash is unusable");
                false
            }
        }
    }
}

/// Decode the value of an `Authorization: Basic <base64>` header.
///
/// Returns `None` for other schemes, invalid base64, non-UTF-8 payloads, or
/// payloads without a `:` separator.
pub fn parse_basic_header(value: &str) -> Option<Credentials> {
    let encoded = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Encode a username and password as an `Authorization` header value.
pub fn encode_basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_encoded_header() {
        let header = encode_basic_header("alice", "pa:ss");
        let creds = parse_basic_header(&header).expect("header should parse");

        // Only the first colon separates user from password.
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "pa:ss");
    }

    #[test]
    fn test_parse_rejects_other_schemes_and_garbage() {
        assert_eq!(parse_basic_header("Bearer abc.def"), None);
        assert_eq!(parse_basic_header("Basic !!!not-base64"), None);
        // "nocolon" base64-encoded.
        assert_eq!(parse_basic_header("Basic bm9jb2xvbg=="), None);
    }

    #[test]
    fn test_verify_checks_user_and_password() {
        let config = BasicAuthConfig::new("user", "secret");

        let good = Credentials {
            username: "user".into(),
            password: "secret".into(),
        };
        let wrong_user = Credentials {
            username: "other".into(),
            password: "secret".into(),
        };
        let wrong_pass = Credentials {
            username: "user".into(),
            password: "nope".into(),
        };

        assert!(config.verify(&good));
        assert!(!config.verify(&wrong_user));
        assert!(!config.verify(&wrong_pass));
    }
}
