//! GraphQL connection types and boundary helpers.

use tranche_core::{Cursor, PaginationArgs};

/// Maximum page size accepted at the API boundary.
pub const MAX_PAGE_SIZE: i32 = 100;
/// Default page size when the client supplies none.
pub const DEFAULT_PAGE_SIZE: i32 = 20;

/// Information about the current page in a paginated result.
#[derive(async_graphql::SimpleObject, Debug, Clone)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl From<tranche_core::PageInfo> for PageInfo {
    fn from(info: tranche_core::PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor.map(|c| c.value),
            end_cursor: info.end_cursor.map(|c| c.value),
        }
    }
}

/// Clamp a client-supplied page size into `1..=MAX_PAGE_SIZE`, defaulting
/// to [`DEFAULT_PAGE_SIZE`] when absent.
pub fn clamp_page_size(first: Option<i32>) -> i64 {
    i64::from(first.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE))
}

/// Map raw GraphQL pagination arguments into [`PaginationArgs`].
///
/// No clamping happens here; apply [`clamp_page_size`] to `first`/`last`
/// at the resolver boundary when the API enforces page-size limits.
pub fn connection_args(
    first: Option<i32>,
    after: Option<String>,
    last: Option<i32>,
    before: Option<String>,
) -> PaginationArgs {
    PaginationArgs {
        after: after.map(|value| Cursor { value }),
        before: before.map(|value| Cursor { value }),
        first: first.map(i64::from),
        last: last.map(i64::from),
    }
}

/// Generate Relay-style connection types (Edge + Connection) with a `From`
/// impl converting from the core connection.
///
/// `$node` is the GraphQL output type, `$model` the core-side item type
/// (`$node` must be `From<$model>`).
#[macro_export]
macro_rules! define_connection {
    ($node:ty, $model:ty, $edge:ident, $connection:ident) => {
        #[derive(async_graphql::SimpleObject)]
        pub struct $edge {
            pub node: $node,
            pub cursor: String,
        }

        #[derive(async_graphql::SimpleObject)]
        pub struct $connection {
            pub edges: Vec<$edge>,
            pub page_info: $crate::PageInfo,
            pub total_count: Option<i64>,
        }

        impl From<$crate::__private::Connection<$model>> for $connection {
            fn from(conn: $crate::__private::Connection<$model>) -> Self {
                Self {
                    edges: conn
                        .edges
                        .into_iter()
                        .map(|e| $edge {
                            node: <$node>::from(e.node),
                            cursor: e.cursor.value,
                        })
                        .collect(),
                    page_info: $crate::PageInfo::from(conn.page_info),
                    total_count: conn.total_count,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tranche_core::{connection_from_slice, CursorCodec};

    #[test]
    fn test_page_size_clamping() {
        // Valeurs négatives/zéro clampées à 1
        assert_eq!(clamp_page_size(Some(-100)), 1);
        assert_eq!(clamp_page_size(Some(0)), 1);
        // Valeurs trop grandes clampées à MAX
        assert_eq!(clamp_page_size(Some(10000)), i64::from(MAX_PAGE_SIZE));
        // Absente -> défaut
        assert_eq!(clamp_page_size(None), i64::from(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_connection_args_mapping() {
        let args = connection_args(Some(5), Some("abc".into()), None, None);
        assert_eq!(args.first, Some(5));
        assert_eq!(args.after.unwrap().value, "abc");
        assert_eq!(args.last, None);
        assert_eq!(args.before, None);
    }

    #[test]
    fn test_page_info_conversion() {
        let codec = CursorCodec::default();
        let core_info = tranche_core::PageInfo {
            has_next_page: true,
            has_previous_page: false,
            start_cursor: Some(codec.encode(0)),
            end_cursor: Some(codec.encode(2)),
        };

        let info = PageInfo::from(core_info.clone());
        assert!(info.has_next_page);
        assert!(!info.has_previous_page);
        assert_eq!(info.start_cursor, Some(core_info.start_cursor.unwrap().value));
        assert_eq!(info.end_cursor, Some(core_info.end_cursor.unwrap().value));
    }

    #[test]
    fn test_define_connection_macro() {
        #[derive(Clone)]
        struct ItemModel {
            label: String,
        }

        #[derive(async_graphql::SimpleObject)]
        struct Item {
            label: String,
        }

        impl From<ItemModel> for Item {
            fn from(m: ItemModel) -> Self {
                Self { label: m.label }
            }
        }

        define_connection!(Item, ItemModel, ItemEdge, ItemConnection);

        let codec = CursorCodec::default();
        let args = connection_args(Some(2), None, None, None);
        let slice = vec![
            ItemModel { label: "a".into() },
            ItemModel { label: "b".into() },
        ];

        let conn = connection_from_slice(&codec, slice, &args, 5).unwrap();
        let gql = ItemConnection::from(conn);

        assert_eq!(gql.edges.len(), 2);
        assert_eq!(gql.edges[0].node.label, "a");
        assert_eq!(gql.edges[0].cursor, codec.encode(0).value);
        assert!(gql.page_info.has_next_page);
        assert_eq!(gql.total_count, Some(5));
    }
}
