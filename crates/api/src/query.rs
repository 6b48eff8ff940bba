//! Shared query parameter types for API handlers.

use newswire_core::pagination::{PageRequest, SortOrder, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

use crate::error::AppResult;

/// Generic pagination parameters (`?page=&size=&sort=`).
///
/// `page` is zero-based; `sort` is `field` or `field,asc|desc`. Values are
/// clamped when the [`PageRequest`] is built.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageParams {
    /// Build a [`PageRequest`], rejecting malformed sort tokens with a
    /// validation error.
    pub fn into_page_request(self) -> AppResult<PageRequest> {
        let sort = match self.sort.as_deref() {
            Some(raw) => vec![SortOrder::parse(raw)?],
            None => Vec::new(),
        };
        Ok(PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        ))
    }
}
