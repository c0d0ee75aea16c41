//! Byte-stream boundary for the dynpack codec.
//!
//! The codec core never touches memory or files directly; it pulls bytes
//! through [`ByteSource`] and pushes bytes through [`ByteSink`]. This crate
//! defines those two traits and the stock implementations: an in-memory
//! [`Reader`] over a byte slice, an auto-growing [`Writer`], and buffered
//! file-backed [`FileReader`] / [`FileWriter`] pairs.

mod file;
mod reader;
mod sink;
mod source;
mod writer;

pub use file::{FileReader, FileWriter};
pub use reader::Reader;
pub use sink::ByteSink;
pub use source::ByteSource;
pub use writer::Writer;
