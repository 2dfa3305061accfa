//! Constants shared by the listing call and the filter synchronizer.

use std::time::Duration;

/// Rows requested per listing call. The catalog only ever shows the first page.
pub const PAGE_SIZE: u64 = 100;

/// Quiet period after a tag or resource-type toggle before the listing is fetched.
pub const FILTER_FETCH_DELAY: Duration = Duration::from_millis(200);

/// Settle delay after a search-text edit before it reaches the URL and the fetch.
pub const SEARCH_TEXT_SETTLE_DELAY: Duration = Duration::from_millis(400);

pub const TAGS_PARAM: &str = "tags";
pub const RESOURCE_TYPES_PARAM: &str = "resourceTypes";
pub const SEARCH_TEXT_PARAM: &str = "searchText";
