//! File-backed byte source and sink.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{ByteSink, ByteSource};

/// A buffered [`ByteSource`] over a file.
///
/// A read that hits end-of-file or an I/O error fails as a whole; the
/// partially consumed stream position is unspecified afterwards, matching
/// the source contract.
pub struct FileReader {
    file: BufReader<File>,
    ok: bool,
    eof: bool,
}

impl FileReader {
    /// Opens the file at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: BufReader::new(File::open(path)?),
            ok: true,
            eof: false,
        })
    }

    fn fill(&mut self, buf: &mut [u8]) -> bool {
        if !self.ok || self.eof {
            return false;
        }
        match self.file.read_exact(buf) {
            Ok(()) => true,
            Err(e) => {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    self.eof = true;
                } else {
                    self.ok = false;
                }
                false
            }
        }
    }
}

impl ByteSource for FileReader {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf).then_some(buf[0])
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf).then_some(buf)
    }

    fn read_bytes(&mut self, len: usize) -> Option<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf).then_some(buf)
    }

    fn is_ok(&self) -> bool {
        self.ok
    }

    fn is_eof(&self) -> bool {
        self.eof
    }
}

/// A buffered [`ByteSink`] over a file.
///
/// The first I/O error makes the sink reject the current and every later
/// write. Call [`flush`](FileWriter::flush) before dropping to learn about
/// errors deferred by buffering.
pub struct FileWriter {
    file: BufWriter<File>,
    ok: bool,
}

impl FileWriter {
    /// Creates (or truncates) the file at `path` for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: BufWriter::new(File::create(path)?),
            ok: true,
        })
    }

    /// Flushes buffered bytes to the file.
    pub fn flush(&mut self) -> bool {
        if self.ok && self.file.flush().is_err() {
            self.ok = false;
        }
        self.ok
    }
}

impl ByteSink for FileWriter {
    fn write_byte(&mut self, byte: u8) -> bool {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, buf: &[u8]) -> bool {
        if !self.ok {
            return false;
        }
        if self.file.write_all(buf).is_err() {
            self.ok = false;
        }
        self.ok
    }

    fn is_ok(&self) -> bool {
        self.ok
    }
}
