use std::collections::BTreeMap;
use std::fmt;

use url::Url;

use super::encoding::QueryArg;
use super::errors::{ApiErrorKind, ApiResult};
use crate::utils::auth::redact_authorization;

/// The value of a single query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Int(i64),
    Str(String),
}

impl QueryValue {
    /// Compares the rendered values, so `Int(50)` equals `Str("50")`.
    /// Query strings carry no types; a parsed request only ever holds strings.
    pub fn loosely_eq(&self, other: &QueryValue) -> bool {
        match (self, other) {
            (QueryValue::Int(a), QueryValue::Int(b)) => a == b,
            (QueryValue::Str(a), QueryValue::Str(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(value) => write!(f, "{value}"),
            QueryValue::Str(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_owned())
    }
}

/// Query parameters by name.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// Header values by name.
pub type Headers = BTreeMap<String, String>;

/// Describes a request made (or expected to be made) against the API.
/// Once built it is immutable apart from the chained `with_*` setters.
#[derive(Clone, PartialEq)]
pub struct HttpRequest {
    url: Url,
    query_params: QueryParams,
    any_query_params: bool,
    headers: Headers,
    body: Option<String>,
}

impl HttpRequest {
    /// Creates a request descriptor for an absolute URL.
    ///
    /// Query params may be given either as part of `url` or through
    /// `query_params`, but not both.
    pub fn new(url: &str, query_params: QueryParams, headers: Headers) -> ApiResult<Self> {
        let mut url = Url::parse(url)?;
        if url.cannot_be_a_base() {
            return Err(ApiErrorKind::BadUrl.into());
        }

        let query_params = match url.query() {
            Some(_) if !query_params.is_empty() => {
                return Err(ApiErrorKind::AmbiguousQuery.into());
            }
            Some(_) => url
                .query_pairs()
                .map(|(key, value)| (key.into_owned(), QueryValue::Str(value.into_owned())))
                .collect(),
            None => query_params,
        };
        url.set_query(None);
        url.set_fragment(None);

        let request = HttpRequest {
            url,
            query_params,
            any_query_params: false,
            headers: Headers::new(),
            body: None,
        };

        Ok(headers
            .iter()
            .fold(request, |request, (key, value)| request.with_header(key, value)))
    }

    /// Parses a full URL, query string included, into a request descriptor.
    pub fn from_url(url: &str) -> ApiResult<Self> {
        HttpRequest::new(url, QueryParams::new(), Headers::new())
    }

    /// adds a specific header to the request
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        let value = value.trim().lines().next().unwrap_or("");
        self.headers.insert(key.to_owned(), value.to_owned());
        self
    }

    /// sets the request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Makes this request match other requests regardless of their query params.
    pub fn with_any_query_params(mut self) -> Self {
        self.any_query_params = true;
        self
    }

    /// Returns the URL without its query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    pub fn accepts_any_query_params(&self) -> bool {
        self.any_query_params
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up a header, ignoring the case of its name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_key, _)| header_key.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Encodes the query params as `key=value` pairs joined by `&`, in key order.
    pub fn query_string(&self) -> String {
        self.query_params
            .iter()
            .map(|(key, value)| format!("{}={}", QueryArg(key), QueryArg(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the URL with the query string appended.
    pub fn full_url(&self) -> String {
        if self.query_params.is_empty() {
            self.url.to_string()
        } else {
            format!("{}?{}", self.url, self.query_string())
        }
    }

    /// Checks whether `actual` satisfies this request taken as an expectation.
    ///
    /// The URLs (scheme, host, port and path) must be equal. Query params
    /// must be equal unless this request accepts any. Every header of this
    /// request must be present in `actual`, which may carry more. A body is
    /// only compared when this request has one.
    pub fn matches(&self, actual: &HttpRequest) -> bool {
        self.matches_url(actual)
            && self.matches_query_params(actual)
            && self.matches_headers(actual)
            && self.matches_body(actual)
    }

    fn matches_url(&self, actual: &HttpRequest) -> bool {
        self.url.scheme() == actual.url.scheme()
            && self.url.host_str() == actual.url.host_str()
            && self.url.port_or_known_default() == actual.url.port_or_known_default()
            && self.url.path() == actual.url.path()
    }

    fn matches_query_params(&self, actual: &HttpRequest) -> bool {
        if self.any_query_params {
            return true;
        }
        self.query_params.len() == actual.query_params.len()
            && self.query_params.iter().all(|(key, value)| {
                actual
                    .query_params
                    .get(key)
                    .is_some_and(|other| value.loosely_eq(other))
            })
    }

    fn matches_headers(&self, actual: &HttpRequest) -> bool {
        self.headers
            .iter()
            .all(|(key, value)| actual.header(key) == Some(value.as_str()))
    }

    fn matches_body(&self, actual: &HttpRequest) -> bool {
        self.body.is_none() || self.body == actual.body
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|(key, value)| redact_authorization(&format!("{key}: {value}")).into_owned())
            .collect();

        f.debug_struct("HttpRequest")
            .field("url", &self.full_url())
            .field("any_query_params", &self.any_query_params)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}
