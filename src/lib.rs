//! Request builders and descriptors for exercising Zendesk Support
//! endpoints against a mocked HTTP server.

#![warn(clippy::allow_attributes)]
#![warn(clippy::unnecessary_wraps)]

pub mod api;
pub mod config;
pub mod constants;
pub mod utils;

// Re-export commonly used types
pub use api::builders::{
    BaseRequestBuilder, PostsVotesRequestBuilder, ZendeskSupportRequestBuilder,
};
pub use api::{HttpRequest, QueryParams, QueryValue};
pub use config::Config;
pub use utils::auth::{ApiTokenAuthenticator, Authenticator, OAuthAuthenticator};
