//! Offset window resolution.
//!
//! Translates relative pagination arguments into an absolute
//! `[start_offset, end_offset)` window against a collection of known size.

use tracing::trace;

use crate::cursor::CursorCodec;
use crate::error::{PaginationError, PaginationResult};
use crate::types::{LimitSkip, OffsetWindow, PaginationArgs};

/// Resolve pagination arguments into a concrete offset window.
///
/// The narrowing order matters and is load-bearing:
///
/// 1. `after`/`before` establish the outer bounds (absolute positioning):
///    `start = max(after, -1) + 1`, `end = min(before, count)`.
/// 2. `first` tightens the end: `end = min(end, start + first)`.
/// 3. `last` tightens the start: `start = max(start, end - last)`.
///
/// This guarantees `first` always counts forward from `after` and `last`
/// always counts back from `before`, whatever combination was supplied.
/// When both `first` and `last` are given their effects compose
/// sequentially, which can leave `start > end` (e.g. `before: 2, last: 10,
/// first: 0`); such a window means "empty result" and is not repaired here.
///
/// Unparseable cursors fall back to their defaults (`-1` for `after`,
/// `count` for `before`); out-of-range cursor offsets are clamped by the
/// min/max steps above. The narrowing arithmetic saturates: a
/// well-formed cursor can encode any `i64` offset (decoding does not
/// range-check), so offsets near the integer limits must degrade to an
/// empty window instead of overflowing.
///
/// # Errors
///
/// [`PaginationError::InvalidArgument`] when `first` or `last` is negative.
pub fn resolve_offsets(
    codec: &CursorCodec,
    args: &PaginationArgs,
    count: i64,
) -> PaginationResult<OffsetWindow> {
    let before_offset = codec.offset_or_default(args.before.as_ref(), count);
    let after_offset = codec.offset_or_default(args.after.as_ref(), -1);

    let mut start_offset = after_offset.max(-1).saturating_add(1);
    let mut end_offset = before_offset.min(count);

    if let Some(first) = args.first {
        if first < 0 {
            return Err(PaginationError::InvalidArgument {
                name: "first",
                value: first,
            });
        }
        end_offset = end_offset.min(start_offset.saturating_add(first));
    }

    if let Some(last) = args.last {
        if last < 0 {
            return Err(PaginationError::InvalidArgument {
                name: "last",
                value: last,
            });
        }
        start_offset = start_offset.max(end_offset.saturating_sub(last));
    }

    trace!(
        before_offset,
        after_offset,
        start_offset,
        end_offset,
        count,
        "resolved pagination window"
    );

    Ok(OffsetWindow {
        before_offset,
        after_offset,
        start_offset,
        end_offset,
    })
}

/// Resolve pagination arguments into a `{limit, skip}` pair for data
/// sources with limit/skip query semantics.
///
/// An inverted window (`start > end`, possible when `first` and `last` are
/// combined adversarially) is clamped to `limit = 0` so it never reaches a
/// data source as a negative limit.
///
/// # Errors
///
/// [`PaginationError::InvalidArgument`] when `first` or `last` is negative.
pub fn limit_skip_from_args(
    codec: &CursorCodec,
    args: &PaginationArgs,
    count: i64,
) -> PaginationResult<LimitSkip> {
    let window = resolve_offsets(codec, args, count)?;

    Ok(LimitSkip {
        limit: window.end_offset.saturating_sub(window.start_offset).max(0),
        skip: window.start_offset.max(0),
    })
}
