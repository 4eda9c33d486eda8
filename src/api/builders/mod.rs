//! Builders producing [`HttpRequest`] descriptors for Zendesk Support endpoints.
//!
//! Every endpoint builder wraps a [`BaseRequestBuilder`] holding the state
//! shared by all endpoints, and implements [`ZendeskSupportRequestBuilder`]
//! to add its own query params on top.

mod posts_votes;

pub use posts_votes::PostsVotesRequestBuilder;

use log::debug;

use crate::api::{ApiResult, Headers, HttpRequest, QueryParams};
use crate::config::Config;
use crate::constants::{API_VERSION_PATH, ZENDESK_HOST};
use crate::utils::auth::{Authenticator, AUTHORIZATION_HEADER};

/// State shared by every Zendesk Support request builder.
#[derive(Debug)]
pub struct BaseRequestBuilder<'a> {
    subdomain: String,
    resource: String,
    authenticator: Option<&'a dyn Authenticator>,
    custom_url: Option<String>,
    api_url: Option<String>,
}

impl<'a> BaseRequestBuilder<'a> {
    /// Creates a builder for `resource`, a path below `api/v2/`.
    pub fn new(subdomain: impl Into<String>, resource: impl Into<String>) -> Self {
        BaseRequestBuilder {
            subdomain: subdomain.into(),
            resource: resource.into(),
            authenticator: None,
            custom_url: None,
            api_url: None,
        }
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn authenticator(&self) -> Option<&'a dyn Authenticator> {
        self.authenticator
    }

    fn api_root(&self) -> String {
        match self.api_url {
            Some(ref api_url) if api_url.ends_with('/') => api_url.clone(),
            Some(ref api_url) => format!("{api_url}/"),
            None => format!("https://{}.{ZENDESK_HOST}/{API_VERSION_PATH}", self.subdomain),
        }
    }

    /// A custom URL wins over the one computed from subdomain and resource.
    fn url(&self) -> String {
        match self.custom_url {
            Some(ref custom_url) => custom_url.clone(),
            None => format!("{}{}", self.api_root(), self.resource),
        }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(authenticator) = self.authenticator {
            headers.insert(
                AUTHORIZATION_HEADER.to_owned(),
                authenticator.client_access_token(),
            );
        }
        headers
    }
}

/// Common interface of the Zendesk Support request builders.
///
/// Implementors only provide access to their [`BaseRequestBuilder`] and,
/// usually, override [`query_params`](Self::query_params).
pub trait ZendeskSupportRequestBuilder<'a>: Sized {
    fn base(&self) -> &BaseRequestBuilder<'a>;

    fn base_mut(&mut self) -> &mut BaseRequestBuilder<'a>;

    fn url(&self) -> String {
        self.base().url()
    }

    /// Query params of the request. The base builder has none.
    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }

    fn headers(&self) -> Headers {
        self.base().headers()
    }

    fn request_body(&self) -> Option<String> {
        None
    }

    /// Attaches the authenticator filling in the `Authorization` header.
    fn with_authenticator(mut self, authenticator: &'a dyn Authenticator) -> Self {
        self.base_mut().authenticator = Some(authenticator);
        self
    }

    fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.base_mut().subdomain = subdomain.into();
        self
    }

    /// Replaces the whole URL, resource included.
    fn with_custom_url(mut self, custom_url: impl Into<String>) -> Self {
        self.base_mut().custom_url = Some(custom_url.into());
        self
    }

    /// Replaces the `https://{subdomain}.zendesk.com/api/v2/` root the
    /// resource is appended to.
    fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.base_mut().api_url = Some(api_url.into());
        self
    }

    /// Applies the API root override of `config`, if it has one.
    fn with_config(self, config: &Config) -> Self {
        match config.api_url() {
            Some(api_url) => self.with_api_url(api_url.as_str()),
            None => self,
        }
    }

    /// Produces the request descriptor.
    fn build(&self) -> ApiResult<HttpRequest> {
        let mut request = HttpRequest::new(&self.url(), self.query_params(), self.headers())?;
        if let Some(body) = self.request_body() {
            request = request.with_body(body);
        }
        debug!("built request: {request:?}");
        Ok(request)
    }
}

impl<'a> ZendeskSupportRequestBuilder<'a> for BaseRequestBuilder<'a> {
    fn base(&self) -> &BaseRequestBuilder<'a> {
        self
    }

    fn base_mut(&mut self) -> &mut BaseRequestBuilder<'a> {
        self
    }
}
