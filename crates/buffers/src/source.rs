//! The pull side of the byte-stream boundary.

/// A synchronous supplier of bytes for the decoder.
///
/// Every read either yields exactly what was asked for or `None`; a source
/// must never report a short read as success. After a failed read the
/// stream position is unspecified and [`is_ok`](ByteSource::is_ok) /
/// [`is_eof`](ByteSource::is_eof) tell the caller why the read failed.
pub trait ByteSource {
    /// Consumes and returns the next byte, or `None` on EOF or error.
    fn read_byte(&mut self) -> Option<u8>;

    /// Consumes `N` bytes known at compile time.
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]>;

    /// Consumes `len` bytes chosen at runtime.
    fn read_bytes(&mut self, len: usize) -> Option<Vec<u8>>;

    /// `true` while the source has not observed an error.
    fn is_ok(&self) -> bool;

    /// `true` once the source has run out of bytes.
    fn is_eof(&self) -> bool;
}
