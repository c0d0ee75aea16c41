//! MessagePack decoder over a [`ByteSource`].

use dynpack_buffers::ByteSource;

use crate::be;
use crate::{DecodeError, OrderedMap, PackExtension, PackStr, PackValue};

/// Default cap on array/map nesting.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Decodes MessagePack values pulled from a [`ByteSource`].
///
/// Each [`decode`](MsgPackDecoder::decode) call consumes exactly the bytes
/// of one top-level value. On failure the amount consumed from the source
/// is unspecified; no partial value is returned.
///
/// # Example
///
/// ```
/// use dynpack::{MsgPackDecoder, PackValue};
/// use dynpack_buffers::Reader;
///
/// let mut decoder = MsgPackDecoder::new(Reader::new(&[0x93, 0x01, 0xa1, 0x61, 0xc0]));
/// let value = decoder.decode().unwrap();
/// assert_eq!(value.as_array().len(), 3);
/// assert_eq!(value.as_array()[1], PackValue::Str("a".into()));
/// ```
pub struct MsgPackDecoder<R: ByteSource> {
    pub source: R,
    max_depth: usize,
    strict_utf8: bool,
}

impl<R: ByteSource> MsgPackDecoder<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            max_depth: DEFAULT_MAX_DEPTH,
            strict_utf8: false,
        }
    }

    /// Replaces the nesting cap. Exceeding it fails the decode with
    /// [`DecodeError::DepthLimitExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Opts in to rejecting malformed UTF-8 in str payloads with
    /// [`DecodeError::InvalidUtf8`]. Off by default: str bytes pass
    /// through verbatim, the wire contract is unchanged either way.
    pub fn with_strict_utf8(mut self, strict_utf8: bool) -> Self {
        self.strict_utf8 = strict_utf8;
        self
    }

    /// Gives the source back, e.g. to inspect its position.
    pub fn into_source(self) -> R {
        self.source
    }

    /// Decodes the next top-level value from the source.
    pub fn decode(&mut self) -> Result<PackValue, DecodeError> {
        self.read_any(0)
    }

    fn read_any(&mut self, depth: usize) -> Result<PackValue, DecodeError> {
        let byte = self.source.read_byte().ok_or(DecodeError::UnexpectedEof)?;

        // positive fixint: 0x00..=0x7f
        if byte <= 0x7f {
            return Ok(PackValue::UInt(byte as u64));
        }
        // negative fixint: 0xe0..=0xff
        if byte >= 0xe0 {
            return Ok(PackValue::Int(byte as i8 as i64));
        }
        // fixmap: 0x80..=0x8f
        if (0x80..=0x8f).contains(&byte) {
            return self.read_map((byte & 0xf) as usize, depth);
        }
        // fixarray: 0x90..=0x9f
        if (0x90..=0x9f).contains(&byte) {
            return self.read_array((byte & 0xf) as usize, depth);
        }
        // fixstr: 0xa0..=0xbf
        if (0xa0..=0xbf).contains(&byte) {
            return self.read_str((byte & 0x1f) as usize);
        }

        match byte {
            0xc0 => Ok(PackValue::Nil),
            0xc1 => Err(DecodeError::ReservedMarker),
            0xc2 => Ok(PackValue::Bool(false)),
            0xc3 => Ok(PackValue::Bool(true)),
            // bin 8 / 16 / 32
            0xc4 => {
                let len = self.u8_len()?;
                self.read_bin(len)
            }
            0xc5 => {
                let len = self.u16_len()?;
                self.read_bin(len)
            }
            0xc6 => {
                let len = self.u32_len()?;
                self.read_bin(len)
            }
            // ext 8 / 16 / 32
            0xc7 => {
                let len = self.u8_len()?;
                self.read_ext(len)
            }
            0xc8 => {
                let len = self.u16_len()?;
                self.read_ext(len)
            }
            0xc9 => {
                let len = self.u32_len()?;
                self.read_ext(len)
            }
            // float 32 / 64
            0xca => be::read_f32(&mut self.source)
                .map(PackValue::Float32)
                .ok_or(DecodeError::UnexpectedEof),
            0xcb => be::read_f64(&mut self.source)
                .map(PackValue::Float64)
                .ok_or(DecodeError::UnexpectedEof),
            // uint 8 / 16 / 32 / 64
            0xcc => be::read_u8(&mut self.source)
                .map(|v| PackValue::UInt(v as u64))
                .ok_or(DecodeError::UnexpectedEof),
            0xcd => be::read_u16(&mut self.source)
                .map(|v| PackValue::UInt(v as u64))
                .ok_or(DecodeError::UnexpectedEof),
            0xce => be::read_u32(&mut self.source)
                .map(|v| PackValue::UInt(v as u64))
                .ok_or(DecodeError::UnexpectedEof),
            0xcf => be::read_u64(&mut self.source)
                .map(PackValue::UInt)
                .ok_or(DecodeError::UnexpectedEof),
            // int 8 / 16 / 32 / 64
            0xd0 => be::read_i8(&mut self.source)
                .map(|v| PackValue::Int(v as i64))
                .ok_or(DecodeError::UnexpectedEof),
            0xd1 => be::read_i16(&mut self.source)
                .map(|v| PackValue::Int(v as i64))
                .ok_or(DecodeError::UnexpectedEof),
            0xd2 => be::read_i32(&mut self.source)
                .map(|v| PackValue::Int(v as i64))
                .ok_or(DecodeError::UnexpectedEof),
            0xd3 => be::read_i64(&mut self.source)
                .map(PackValue::Int)
                .ok_or(DecodeError::UnexpectedEof),
            // fixext 1 / 2 / 4 / 8 / 16
            0xd4 => self.read_ext(1),
            0xd5 => self.read_ext(2),
            0xd6 => self.read_ext(4),
            0xd7 => self.read_ext(8),
            0xd8 => self.read_ext(16),
            // str 8 / 16 / 32
            0xd9 => {
                let len = self.u8_len()?;
                self.read_str(len)
            }
            0xda => {
                let len = self.u16_len()?;
                self.read_str(len)
            }
            0xdb => {
                let len = self.u32_len()?;
                self.read_str(len)
            }
            // array 16 / 32
            0xdc => {
                let len = self.u16_len()?;
                self.read_array(len, depth)
            }
            0xdd => {
                let len = self.u32_len()?;
                self.read_array(len, depth)
            }
            // map 16 / 32
            0xde => {
                let len = self.u16_len()?;
                self.read_map(len, depth)
            }
            0xdf => {
                let len = self.u32_len()?;
                self.read_map(len, depth)
            }
            _ => unreachable!("all format bytes are dispatched above"),
        }
    }

    fn u8_len(&mut self) -> Result<usize, DecodeError> {
        be::read_u8(&mut self.source)
            .map(|v| v as usize)
            .ok_or(DecodeError::UnexpectedEof)
    }

    fn u16_len(&mut self) -> Result<usize, DecodeError> {
        be::read_u16(&mut self.source)
            .map(|v| v as usize)
            .ok_or(DecodeError::UnexpectedEof)
    }

    fn u32_len(&mut self) -> Result<usize, DecodeError> {
        be::read_u32(&mut self.source)
            .map(|v| v as usize)
            .ok_or(DecodeError::UnexpectedEof)
    }

    fn read_str(&mut self, len: usize) -> Result<PackValue, DecodeError> {
        let bytes = self
            .source
            .read_bytes(len)
            .ok_or(DecodeError::UnexpectedEof)?;
        if self.strict_utf8 && std::str::from_utf8(&bytes).is_err() {
            return Err(DecodeError::InvalidUtf8);
        }
        Ok(PackValue::Str(PackStr::new(bytes)))
    }

    fn read_bin(&mut self, len: usize) -> Result<PackValue, DecodeError> {
        self.source
            .read_bytes(len)
            .map(PackValue::Bin)
            .ok_or(DecodeError::UnexpectedEof)
    }

    fn read_ext(&mut self, len: usize) -> Result<PackValue, DecodeError> {
        // The type byte sits between the length and the payload.
        let code = be::read_i8(&mut self.source).ok_or(DecodeError::UnexpectedEof)?;
        let data = self
            .source
            .read_bytes(len)
            .ok_or(DecodeError::UnexpectedEof)?;
        Ok(PackValue::Ext(PackExtension::new(code, data)))
    }

    fn read_array(&mut self, len: usize, depth: usize) -> Result<PackValue, DecodeError> {
        if depth >= self.max_depth {
            return Err(DecodeError::DepthLimitExceeded(self.max_depth));
        }
        let mut items = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            items.push(self.read_any(depth + 1)?);
        }
        Ok(PackValue::Array(items))
    }

    fn read_map(&mut self, len: usize, depth: usize) -> Result<PackValue, DecodeError> {
        if depth >= self.max_depth {
            return Err(DecodeError::DepthLimitExceeded(self.max_depth));
        }
        let mut map = OrderedMap::new();
        for _ in 0..len {
            let key = self.read_any(depth + 1)?;
            let value = self.read_any(depth + 1)?;
            map.push_back(key, value)
                .map_err(|_| DecodeError::DuplicateKey)?;
        }
        Ok(PackValue::Map(map))
    }
}
