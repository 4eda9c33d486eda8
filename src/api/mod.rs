//! This module implements the request side of the Zendesk Support API as
//! the connector's tests see it: request descriptors, the builders that
//! produce them, and cursor pagination helpers.

pub mod builders;
pub mod pagination;

mod encoding;
mod errors;
mod request;

pub use encoding::QueryArg;
pub use errors::{ApiError, ApiErrorKind, ApiResult};
pub use request::{Headers, HttpRequest, QueryParams, QueryValue};
