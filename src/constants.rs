//! Provides some useful constants.

/// The Zendesk account the connector's integration tests are recorded against.
pub const DEFAULT_SUBDOMAIN: &str = "d3v-airbyte";

/// Host every Zendesk account lives under.
pub const ZENDESK_HOST: &str = "zendesk.com";

/// Path prefix of the Zendesk Support REST API.
pub const API_VERSION_PATH: &str = "api/v2/";

/// Environment variable overriding the API root (e.g. a local mock server).
pub const API_URL_ENV: &str = "ZENDESK_SUPPORT_API_URL";

/// Environment variable holding the log level filter.
pub const LOG_LEVEL_ENV: &str = "ZENDESK_SUPPORT_LOG_LEVEL";
