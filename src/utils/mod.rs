//! Various utility functionality.

pub mod auth;
pub mod datetime;
pub mod logging;
