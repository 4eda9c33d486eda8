mod api_error;

pub use api_error::{ApiError, ApiErrorKind};

/// Shortcut alias for results of this module.
pub type ApiResult<T> = Result<T, ApiError>;
