//! Zendesk cursor pagination, as far as request builders need it.

use serde::Deserialize;

use super::errors::{ApiError, ApiErrorKind, ApiResult};

#[derive(Debug, Deserialize)]
struct CursorMeta {
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    after_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CursorPage {
    #[serde(default)]
    meta: Option<CursorMeta>,
}

/// Returns the cursor to pass to `with_page_after` for the page following
/// the one in `body`, or `None` if it was the last page.
pub fn next_page_after(body: &[u8]) -> ApiResult<Option<String>> {
    let page: CursorPage = serde_json::from_slice(body)
        .map_err(|err| ApiError::with_source(ApiErrorKind::BadJson, err))?;

    Ok(page
        .meta
        .filter(|meta| meta.has_more)
        .and_then(|meta| meta.after_cursor))
}
