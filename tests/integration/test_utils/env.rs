//! Utilities for setting environment variables in integration tests.

use std::env;

use zendesk_support_requests::constants::{API_URL_ENV, LOG_LEVEL_ENV};

/// Points `Config::from_env` at the mock server and enables debug logging.
pub fn set(server_url: &str) {
    env::set_var(API_URL_ENV, server_url);
    env::set_var(LOG_LEVEL_ENV, "debug");
}

/// Removes everything `set` put into the environment.
pub fn clear() {
    env::remove_var(API_URL_ENV);
    env::remove_var(LOG_LEVEL_ENV);
}
