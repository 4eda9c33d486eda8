//! Defines the Authenticator trait and the credentials Zendesk Support accepts.

use std::fmt::Debug;

use secrecy::{ExposeSecret as _, SecretString};

/// Something that can authenticate a Zendesk Support request.
pub trait Authenticator: Debug {
    /// Returns the full value of the `Authorization` header.
    fn client_access_token(&self) -> String;
}

/// Authenticates with an agent's email address and an API token.
#[derive(Debug, Clone)]
pub struct ApiTokenAuthenticator {
    email: String,
    token: SecretString,
}

impl ApiTokenAuthenticator {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        ApiTokenAuthenticator {
            email: email.into(),
            token: SecretString::new(token.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Authenticator for ApiTokenAuthenticator {
    /// Zendesk expects `{email}/token:{api_token}`, base64 encoded, as basic auth.
    fn client_access_token(&self) -> String {
        let credentials = format!("{}/token:{}", self.email, self.token.expose_secret());
        format!(
            "Basic {}",
            data_encoding::BASE64.encode(credentials.as_bytes())
        )
    }
}

/// Authenticates with an OAuth access token.
#[derive(Debug, Clone)]
pub struct OAuthAuthenticator {
    access_token: SecretString,
}

impl OAuthAuthenticator {
    pub fn new(access_token: impl Into<String>) -> Self {
        OAuthAuthenticator {
            access_token: SecretString::new(access_token.into()),
        }
    }
}

impl Authenticator for OAuthAuthenticator {
    fn client_access_token(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }
}
