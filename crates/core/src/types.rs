//! Value types for cursor pagination.
//!
//! Everything here is a plain value constructed fresh per call; nothing
//! persists beyond the call that produces it.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;

/// Pagination parameters for list queries.
///
/// Supports forward pagination (`first`/`after`) and backward pagination
/// (`last`/`before`). The two directions may be combined; `before`/`after`
/// establish the outer bounds first, then `first`/`last` shrink the window
/// from the respective ends (see [`crate::window::resolve_offsets`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationArgs {
    /// Cursor to start after (forward pagination).
    pub after: Option<Cursor>,
    /// Cursor to end before (backward pagination).
    pub before: Option<Cursor>,
    /// Number of items to fetch from the start of the window.
    pub first: Option<i64>,
    /// Number of items to fetch from the end of the window.
    pub last: Option<i64>,
}

/// The concrete `[start_offset, end_offset)` window resolved from
/// [`PaginationArgs`], plus the raw `before`/`after` offsets used for
/// boundary checks.
///
/// `start_offset >= 0` always holds. `end_offset` can exceed the collection
/// count only transiently inside resolution; by the time a window is
/// returned it is capped at `count`. Adversarial `first`/`last`
/// combinations can produce `start_offset > end_offset`; callers must treat
/// a non-positive-width window as "fetch nothing" (which is what
/// [`crate::window::limit_skip_from_args`] does).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetWindow {
    /// Resolved `before` offset (defaults to `count`).
    pub before_offset: i64,
    /// Resolved `after` offset (defaults to `-1`).
    pub after_offset: i64,
    /// First offset to fetch, inclusive.
    pub start_offset: i64,
    /// One past the last offset to fetch, exclusive.
    pub end_offset: i64,
}

/// Limit/skip form of an [`OffsetWindow`] for data sources with
/// limit/skip query semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitSkip {
    /// Number of items to fetch; `0` means fetch nothing.
    pub limit: i64,
    /// Number of items to skip from the start of the collection.
    pub skip: i64,
}

/// A single item in a paginated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The actual item.
    pub node: T,
    /// Cursor addressing this item's offset.
    pub cursor: Cursor,
}

/// Information about the current page in a paginated result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there are more items after this page.
    ///
    /// Only computed when `first` was supplied; `false` otherwise.
    pub has_next_page: bool,
    /// Whether there are items before this page.
    ///
    /// Only computed when `last` was supplied; `false` otherwise.
    pub has_previous_page: bool,
    /// Cursor of the first item in this page, absent when the page is empty.
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last item in this page, absent when the page is empty.
    pub end_cursor: Option<Cursor>,
}

/// Paginated result set with edges and page info.
///
/// This is the Relay connection pattern for cursor-based pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// List of edges (node + cursor pairs), in slice order.
    pub edges: Vec<Edge<T>>,
    /// Information about the current page.
    pub page_info: PageInfo,
    /// Total count of items in the logical collection.
    pub total_count: Option<i64>,
}
