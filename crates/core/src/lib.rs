//! Core pagination layer for tranche.
//!
//! This crate implements Relay-style cursor pagination over any ordered,
//! offset-addressable collection. It is the innermost layer with no
//! dependencies on GraphQL or any transport - callers bring their own data
//! source and this crate only does the offset arithmetic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   caller's data source                      │
//! │            (SQL, MongoDB, in-memory, anything)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      tranche-graphql                        │
//! │               (async-graphql output types)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  tranche-core  ← YOU ARE HERE               │
//! │        (cursor codec, offset windows, connections)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cursor`] - Opaque cursor encoding/decoding ([`CursorCodec`])
//! - [`types`] - Value types (args, windows, edges, connections)
//! - [`window`] - Offset window resolution and limit/skip translation
//! - [`connection`] - Slice-to-connection assembly
//! - [`error`] - Error types
//!
//! # Usage
//!
//! The flow is always the same three steps:
//!
//! 1. [`window::resolve_offsets`] (or [`window::limit_skip_from_args`])
//!    turns the client's `first`/`after`/`last`/`before` arguments into a
//!    concrete `[start, end)` window.
//! 2. The caller fetches exactly that window from its data source.
//! 3. [`connection::connection_from_slice`] wraps the fetched slice into a
//!    connection with per-item cursors and page-info flags.
//!
//! ```
//! use tranche_core::{connection_from_slice, resolve_offsets, CursorCodec, PaginationArgs};
//!
//! let codec = CursorCodec::new("users:");
//! let args = PaginationArgs {
//!     first: Some(2),
//!     ..Default::default()
//! };
//!
//! let window = resolve_offsets(&codec, &args, 10).unwrap();
//! assert_eq!((window.start_offset, window.end_offset), (0, 2));
//!
//! // Caller fetches collection[0..2], then:
//! let conn = connection_from_slice(&codec, vec!["alice", "bob"], &args, 10).unwrap();
//! assert!(conn.page_info.has_next_page);
//! ```

pub mod connection;
pub mod cursor;
pub mod error;
pub mod types;
pub mod window;

pub use connection::connection_from_slice;
pub use cursor::{Cursor, CursorCodec, DEFAULT_CURSOR_PREFIX};
pub use error::{PaginationError, PaginationResult};
pub use types::{Connection, Edge, LimitSkip, OffsetWindow, PageInfo, PaginationArgs};
pub use window::{limit_skip_from_args, resolve_offsets};
