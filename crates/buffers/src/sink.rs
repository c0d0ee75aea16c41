//! The push side of the byte-stream boundary.

/// A synchronous consumer of bytes for the encoder.
///
/// Writes report success as `true`. A sink that returns `false` has
/// rejected the byte; the encoder aborts without rollback and the caller
/// inspects [`is_ok`](ByteSink::is_ok) for the cause.
pub trait ByteSink {
    /// Appends one byte.
    fn write_byte(&mut self, byte: u8) -> bool;

    /// Appends a run of bytes.
    fn write_bytes(&mut self, buf: &[u8]) -> bool;

    /// `true` while the sink has not observed an error.
    fn is_ok(&self) -> bool;
}
