use std::fmt::Display;

use super::{BaseRequestBuilder, ZendeskSupportRequestBuilder};
use crate::api::QueryParams;
use crate::constants::DEFAULT_SUBDOMAIN;
use crate::utils::auth::Authenticator;
use crate::utils::datetime::{epoch_seconds, parse_datetime, DateTimeParseError};

/// Builds requests for the votes of a community post
/// (`community/posts/{post_id}/votes`).
///
/// Each optional query param is sent only once its setter was called. An
/// empty cursor counts as no cursor.
#[derive(Debug)]
pub struct PostsVotesRequestBuilder<'a> {
    base: BaseRequestBuilder<'a>,
    start_time: Option<i64>,
    page_size: Option<u32>,
    page_after: Option<String>,
}

impl<'a> PostsVotesRequestBuilder<'a> {
    /// Builder for the votes of `post_id` on the test account, authenticated
    /// with `authenticator`. The id is put into the path as is.
    pub fn posts_votes_endpoint(
        authenticator: &'a dyn Authenticator,
        post_id: impl Display,
    ) -> Self {
        PostsVotesRequestBuilder::new(
            DEFAULT_SUBDOMAIN,
            format!("community/posts/{post_id}/votes"),
        )
        .with_authenticator(authenticator)
    }

    pub fn new(subdomain: impl Into<String>, resource: impl Into<String>) -> Self {
        PostsVotesRequestBuilder {
            base: BaseRequestBuilder::new(subdomain, resource),
            start_time: None,
            page_size: None,
            page_after: None,
        }
    }

    /// Sets `start_time` to the Unix timestamp of `start_time`, which may be
    /// in any format [`parse_datetime`] accepts.
    pub fn with_start_time(mut self, start_time: &str) -> Result<Self, DateTimeParseError> {
        self.start_time = Some(epoch_seconds(&parse_datetime(start_time)?));
        Ok(self)
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the cursor of the page to fetch, usually the `after_cursor` of
    /// the previous page.
    pub fn with_page_after(mut self, next_page_token: impl Into<String>) -> Self {
        self.page_after = Some(next_page_token.into());
        self
    }
}

impl<'a> ZendeskSupportRequestBuilder<'a> for PostsVotesRequestBuilder<'a> {
    fn base(&self) -> &BaseRequestBuilder<'a> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRequestBuilder<'a> {
        &mut self.base
    }

    fn query_params(&self) -> QueryParams {
        let mut params = self.base.query_params();
        if let Some(start_time) = self.start_time {
            params.insert("start_time".to_owned(), start_time.into());
        }
        if let Some(page_size) = self.page_size {
            params.insert("page[size]".to_owned(), page_size.into());
        }
        if let Some(page_after) = self.page_after.as_deref().filter(|c| !c.is_empty()) {
            params.insert("page[after]".to_owned(), page_after.into());
        }
        params
    }
}
