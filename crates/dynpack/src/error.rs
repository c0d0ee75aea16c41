//! Error types for the codec and the ordered map.

use thiserror::Error;

/// Errors produced while decoding MessagePack input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("reserved format byte 0xc1")]
    ReservedMarker,
    /// Only produced when the decoder runs with strict UTF-8 enabled.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,
    #[error("duplicate key in map")]
    DuplicateKey,
    #[error("maximum nesting depth {0} exceeded")]
    DepthLimitExceeded(usize),
}

/// Errors produced while encoding a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("sink rejected write")]
    SinkRejected,
    #[error("payload length {0} exceeds the u32 wire limit")]
    LengthOverflow(usize),
}

/// Logic errors raised by [`OrderedMap`](crate::OrderedMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("key already present")]
    DuplicateKey,
    #[error("no such key")]
    KeyNotFound,
    #[error("position {pos} out of bounds (len {len})")]
    PositionOutOfBounds { pos: usize, len: usize },
}
