//! async-graphql output types for tranche connections.
//!
//! This crate adapts [`tranche_core`] connections to GraphQL output types.
//! It contains no server and no transport - just SimpleObject shapes, the
//! [`define_connection!`] macro for generating per-node edge/connection
//! types, and the page-size hygiene helpers a resolver needs at the API
//! boundary.
//!
//! # Defining a connection for a node type
//!
//! ```
//! use async_graphql::SimpleObject;
//! use tranche_graphql::define_connection;
//!
//! // The domain model the data layer returns
//! #[derive(Clone)]
//! struct UserModel {
//!     name: String,
//! }
//!
//! // The GraphQL node type
//! #[derive(SimpleObject)]
//! struct User {
//!     name: String,
//! }
//!
//! impl From<UserModel> for User {
//!     fn from(u: UserModel) -> Self {
//!         Self { name: u.name }
//!     }
//! }
//!
//! define_connection!(User, UserModel, UserEdge, UserConnection);
//! ```
//!
//! A resolver then builds the core connection with
//! [`tranche_core::connection_from_slice`] and returns
//! `UserConnection::from(conn)`.

mod types;

pub use types::{
    clamp_page_size, connection_args, PageInfo, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

// Re-exports for the define_connection! macro; not public API.
#[doc(hidden)]
pub mod __private {
    pub use tranche_core::Connection;
}
