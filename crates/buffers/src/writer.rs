//! In-memory byte sink with auto-growing capacity.

use crate::ByteSink;

/// A [`ByteSink`] backed by an automatically growing buffer.
///
/// The buffer is preallocated and grown in `alloc_size` steps; `x0` marks
/// where the last flush happened and `x` is the write cursor, so a single
/// writer can serve several encode calls and hand each its own bytes.
///
/// # Example
///
/// ```
/// use dynpack_buffers::{ByteSink, Writer};
///
/// let mut writer = Writer::new();
/// writer.write_byte(0x01);
/// writer.write_bytes(&[0x02, 0x03]);
/// assert_eq!(writer.flush(), [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub data: Vec<u8>,
    /// Position where the last flush happened.
    pub x0: usize,
    /// Current write cursor.
    pub x: usize,
    /// Allocation step when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation step (64 KiB).
    pub fn new() -> Self {
        Self::with_alloc_size(64 * 1024)
    }

    /// Creates a new writer with a custom allocation step.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            data: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures at least `capacity` bytes are writable past the cursor.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.data.len() - self.x;
        if remaining < capacity {
            let unflushed = self.x - self.x0;
            let required = unflushed + capacity;
            let new_size = if required <= self.alloc_size {
                self.alloc_size
            } else {
                required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let mut next = vec![0u8; new_size];
        next[..self.x - self.x0].copy_from_slice(&self.data[self.x0..self.x]);
        self.data = next;
        self.x -= self.x0;
        self.x0 = 0;
    }

    /// Number of bytes written since the last flush.
    pub fn written(&self) -> usize {
        self.x - self.x0
    }

    /// Discards everything written since the last flush.
    pub fn reset(&mut self) {
        self.x = self.x0;
    }

    /// Returns the bytes written since the last flush and advances the
    /// flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.data[self.x0..self.x].to_vec();
        self.x0 = self.x;
        out
    }

    /// Returns a view of the bytes written since the last flush without
    /// advancing the flush position.
    pub fn peek_written(&self) -> &[u8] {
        &self.data[self.x0..self.x]
    }
}

impl ByteSink for Writer {
    fn write_byte(&mut self, byte: u8) -> bool {
        self.ensure_capacity(1);
        self.data[self.x] = byte;
        self.x += 1;
        true
    }

    fn write_bytes(&mut self, buf: &[u8]) -> bool {
        self.ensure_capacity(buf.len());
        self.data[self.x..self.x + buf.len()].copy_from_slice(buf);
        self.x += buf.len();
        true
    }

    fn is_ok(&self) -> bool {
        true
    }
}
