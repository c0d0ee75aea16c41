//! Str payload storage.

use std::borrow::Cow;
use std::fmt;

/// The payload of a `Str` value: UTF-8 text by convention, raw bytes by
/// contract.
///
/// The wire format does not guarantee valid UTF-8 and the codec passes
/// str payloads through verbatim, so the bytes live here unvalidated.
/// [`as_utf8`](PackStr::as_utf8) validates on demand;
/// [`to_string_lossy`](PackStr::to_string_lossy) never fails. Ordering and
/// equality are byte-wise, so malformed payloads round-trip exactly.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackStr {
    bytes: Vec<u8>,
}

impl PackStr {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Validates the bytes as UTF-8, returning `None` on malformed input.
    pub fn as_utf8(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Converts to text, replacing malformed sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl fmt::Debug for PackStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_utf8() {
            Some(text) => write!(f, "{text:?}"),
            None => f.debug_tuple("PackStr").field(&self.bytes).finish(),
        }
    }
}

impl From<&str> for PackStr {
    fn from(v: &str) -> Self {
        Self::new(v.as_bytes().to_vec())
    }
}

impl From<String> for PackStr {
    fn from(v: String) -> Self {
        Self::new(v.into_bytes())
    }
}

impl From<Vec<u8>> for PackStr {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}

impl PartialEq<str> for PackStr {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for PackStr {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}
