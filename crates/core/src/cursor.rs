//! Opaque cursor encoding and decoding.
//!
//! A cursor is `base64(prefix + decimal offset)`. The prefix namespaces
//! cursors per connection family so that a cursor minted for one collection
//! is rejected when presented to another - without it, `base64("3")` would
//! be a valid position in every connection of the API.

use serde::{Deserialize, Serialize};

/// Prefix used by [`CursorCodec::default`].
///
/// Deployments that paginate several collection families side by side
/// should construct codecs with distinct prefixes instead.
pub const DEFAULT_CURSOR_PREFIX: &str = "connection:";

/// Opaque cursor for pagination.
///
/// The cursor value is produced by [`CursorCodec::encode`] and should be
/// treated as an opaque token by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor {
    pub value: String,
}

/// Encodes and decodes offsets to/from opaque cursors.
///
/// Stateless apart from the configured prefix; cheap to clone and safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct CursorCodec {
    prefix: String,
}

impl CursorCodec {
    /// Create a codec with the given namespace prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The namespace prefix this codec was constructed with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Create the cursor string for an offset.
    pub fn encode(&self, offset: i64) -> Cursor {
        let raw = format!("{}{}", self.prefix, offset);
        Cursor {
            value: base64::Engine::encode(&base64::engine::general_purpose::STANDARD, raw),
        }
    }

    /// Rederive the offset from a cursor string.
    ///
    /// Returns `None` for anything this codec did not produce: invalid
    /// base64, a foreign prefix, or a non-numeric remainder. Decoding never
    /// fails loudly - callers fall back to a default offset via
    /// [`Self::offset_or_default`].
    pub fn decode(&self, cursor: &Cursor) -> Option<i64> {
        let bytes =
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &cursor.value)
                .ok()?;
        let text = String::from_utf8(bytes).ok()?;
        let digits = text.strip_prefix(self.prefix.as_str())?;
        digits.parse().ok()
    }

    /// Given an optional cursor and a default offset, return the offset to
    /// use: the decoded offset when the cursor is present and valid, the
    /// default otherwise.
    ///
    /// The decoded offset is NOT range-checked here; out-of-range offsets
    /// are clamped by [`crate::window::resolve_offsets`].
    pub fn offset_or_default(&self, cursor: Option<&Cursor>, default_offset: i64) -> i64 {
        match cursor {
            Some(cursor) => self.decode(cursor).unwrap_or(default_offset),
            None => default_offset,
        }
    }
}

impl Default for CursorCodec {
    fn default() -> Self {
        Self::new(DEFAULT_CURSOR_PREFIX)
    }
}
