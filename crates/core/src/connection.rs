//! Slice-to-connection assembly.
//!
//! Wraps an already-fetched slice of items into a Relay connection: one
//! cursor-bearing edge per item, plus page-existence flags derived from the
//! resolved offset window.

use crate::cursor::CursorCodec;
use crate::error::PaginationResult;
use crate::types::{Connection, Edge, PageInfo, PaginationArgs};
use crate::window::resolve_offsets;

/// Assemble a connection from a fetched slice.
///
/// Caller contract: `slice` must hold exactly the items at offsets
/// `[start_offset, end_offset)` of the logical collection, in ascending
/// order, as computed by [`resolve_offsets`] for the same `(args, count)`.
/// Resolution is deterministic, so recomputing the window here is
/// guaranteed to match whatever window the caller fetched against.
///
/// Page-existence flags are directional: `has_previous_page` is only
/// computed when `last` was supplied and `has_next_page` only when `first`
/// was supplied; otherwise the caller did not limit in that direction and
/// the flag defaults to `false`. The bounds they are checked against come
/// from the supplied cursors (`after + 1` / `before`), not from the window
/// itself, so a page shrunk by `first`/`last` still reports neighbours
/// correctly.
///
/// # Errors
///
/// [`crate::PaginationError::InvalidArgument`] when `first` or `last` is
/// negative (same failure as [`resolve_offsets`]).
pub fn connection_from_slice<T>(
    codec: &CursorCodec,
    slice: Vec<T>,
    args: &PaginationArgs,
    count: i64,
) -> PaginationResult<Connection<T>> {
    let window = resolve_offsets(codec, args, count)?;

    let edges: Vec<Edge<T>> = slice
        .into_iter()
        .enumerate()
        .map(|(index, node)| Edge {
            cursor: codec.encode(window.start_offset.saturating_add(index as i64)),
            node,
        })
        .collect();

    let lower_bound = if args.after.is_some() {
        window.after_offset + 1
    } else {
        0
    };
    let upper_bound = if args.before.is_some() {
        window.before_offset.min(count)
    } else {
        count
    };

    let page_info = PageInfo {
        has_next_page: args.first.is_some() && window.end_offset < upper_bound,
        has_previous_page: args.last.is_some() && window.start_offset > lower_bound,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Ok(Connection {
        edges,
        page_info,
        total_count: Some(count),
    })
}
