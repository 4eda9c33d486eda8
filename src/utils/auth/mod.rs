//! This module provides the authenticators attached to Zendesk Support
//! requests, and redaction of the credentials they produce.

mod authenticator;
mod redacting;

pub use authenticator::{ApiTokenAuthenticator, Authenticator, OAuthAuthenticator};
pub use redacting::redact_authorization;


/// Name of the header authenticators fill in.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
