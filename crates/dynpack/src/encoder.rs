//! MessagePack encoder over a [`ByteSink`].

use dynpack_buffers::ByteSink;

use crate::be;
use crate::{EncodeError, OrderedMap, PackExtension, PackStr, PackValue};

/// Encodes values into their canonical MessagePack form.
///
/// Canonical means minimal: every integer, string, binary, array, map, and
/// extension picks the shortest wire family that fits. Non-negative `Int`
/// values use the unsigned families, so they come back as `UInt` after a
/// round trip. Map entries are written in the map's insertion order, key
/// before value.
///
/// # Example
///
/// ```
/// use dynpack::{MsgPackEncoder, PackValue};
/// use dynpack_buffers::Writer;
///
/// let mut encoder = MsgPackEncoder::new(Writer::new());
/// encoder.encode(&PackValue::Nil).unwrap();
/// assert_eq!(encoder.writer.flush(), [0xc0]);
/// ```
pub struct MsgPackEncoder<W: ByteSink> {
    pub writer: W,
}

impl<W: ByteSink> MsgPackEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gives the sink back, e.g. to collect its bytes.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes the canonical encoding of `value` to the sink.
    ///
    /// A failure means the sink rejected a byte or a payload exceeded the
    /// u32 wire limit; whatever was already written stays written.
    pub fn encode(&mut self, value: &PackValue) -> Result<(), EncodeError> {
        self.write_any(value)
    }

    pub fn write_any(&mut self, value: &PackValue) -> Result<(), EncodeError> {
        match value {
            PackValue::Nil => self.write_nil(),
            PackValue::Bool(v) => self.write_bool(*v),
            PackValue::Int(v) => self.write_int(*v),
            PackValue::UInt(v) => self.write_uint(*v),
            PackValue::Float32(v) => self.write_float32(*v),
            PackValue::Float64(v) => self.write_float64(*v),
            PackValue::Str(v) => self.write_str(v),
            PackValue::Bin(v) => self.write_bin(v),
            PackValue::Array(v) => self.write_array(v),
            PackValue::Map(v) => self.write_map(v),
            PackValue::Ext(v) => self.write_ext(v),
        }
    }

    fn put(&mut self, byte: u8) -> Result<(), EncodeError> {
        if self.writer.write_byte(byte) {
            Ok(())
        } else {
            Err(EncodeError::SinkRejected)
        }
    }

    fn put_all(&mut self, buf: &[u8]) -> Result<(), EncodeError> {
        if self.writer.write_bytes(buf) {
            Ok(())
        } else {
            Err(EncodeError::SinkRejected)
        }
    }

    fn check(&mut self, ok: bool) -> Result<(), EncodeError> {
        if ok {
            Ok(())
        } else {
            Err(EncodeError::SinkRejected)
        }
    }

    fn wire_len(len: usize) -> Result<u32, EncodeError> {
        u32::try_from(len).map_err(|_| EncodeError::LengthOverflow(len))
    }

    pub fn write_nil(&mut self) -> Result<(), EncodeError> {
        self.put(0xc0)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), EncodeError> {
        self.put(if value { 0xc3 } else { 0xc2 })
    }

    /// Signed integers: non-negative values take the smallest unsigned
    /// family, negative values the smallest signed one.
    pub fn write_int(&mut self, value: i64) -> Result<(), EncodeError> {
        if value >= 0 {
            return self.write_uint(value as u64);
        }
        if value >= -32 {
            let ok = be::write_i8(&mut self.writer, value as i8);
            self.check(ok)
        } else if value >= i8::MIN as i64 {
            self.put(0xd0)?;
            let ok = be::write_i8(&mut self.writer, value as i8);
            self.check(ok)
        } else if value >= i16::MIN as i64 {
            self.put(0xd1)?;
            let ok = be::write_i16(&mut self.writer, value as i16);
            self.check(ok)
        } else if value >= i32::MIN as i64 {
            self.put(0xd2)?;
            let ok = be::write_i32(&mut self.writer, value as i32);
            self.check(ok)
        } else {
            self.put(0xd3)?;
            let ok = be::write_i64(&mut self.writer, value);
            self.check(ok)
        }
    }

    pub fn write_uint(&mut self, value: u64) -> Result<(), EncodeError> {
        if value <= 0x7f {
            self.put(value as u8)
        } else if value <= 0xff {
            self.put(0xcc)?;
            let ok = be::write_u8(&mut self.writer, value as u8);
            self.check(ok)
        } else if value <= 0xffff {
            self.put(0xcd)?;
            let ok = be::write_u16(&mut self.writer, value as u16);
            self.check(ok)
        } else if value <= 0xffff_ffff {
            self.put(0xce)?;
            let ok = be::write_u32(&mut self.writer, value as u32);
            self.check(ok)
        } else {
            self.put(0xcf)?;
            let ok = be::write_u64(&mut self.writer, value);
            self.check(ok)
        }
    }

    pub fn write_float32(&mut self, value: f32) -> Result<(), EncodeError> {
        self.put(0xca)?;
        let ok = be::write_f32(&mut self.writer, value);
        self.check(ok)
    }

    pub fn write_float64(&mut self, value: f64) -> Result<(), EncodeError> {
        self.put(0xcb)?;
        let ok = be::write_f64(&mut self.writer, value);
        self.check(ok)
    }

    pub fn write_str_header(&mut self, len: usize) -> Result<(), EncodeError> {
        let len = Self::wire_len(len)?;
        if len <= 0x1f {
            self.put(0xa0 | len as u8)
        } else if len <= 0xff {
            self.put(0xd9)?;
            let ok = be::write_u8(&mut self.writer, len as u8);
            self.check(ok)
        } else if len <= 0xffff {
            self.put(0xda)?;
            let ok = be::write_u16(&mut self.writer, len as u16);
            self.check(ok)
        } else {
            self.put(0xdb)?;
            let ok = be::write_u32(&mut self.writer, len);
            self.check(ok)
        }
    }

    pub fn write_str(&mut self, value: &PackStr) -> Result<(), EncodeError> {
        self.write_str_header(value.len())?;
        self.put_all(value.as_bytes())
    }

    pub fn write_bin_header(&mut self, len: usize) -> Result<(), EncodeError> {
        let len = Self::wire_len(len)?;
        if len <= 0xff {
            self.put(0xc4)?;
            let ok = be::write_u8(&mut self.writer, len as u8);
            self.check(ok)
        } else if len <= 0xffff {
            self.put(0xc5)?;
            let ok = be::write_u16(&mut self.writer, len as u16);
            self.check(ok)
        } else {
            self.put(0xc6)?;
            let ok = be::write_u32(&mut self.writer, len);
            self.check(ok)
        }
    }

    pub fn write_bin(&mut self, value: &[u8]) -> Result<(), EncodeError> {
        self.write_bin_header(value.len())?;
        self.put_all(value)
    }

    pub fn write_array_header(&mut self, len: usize) -> Result<(), EncodeError> {
        let len = Self::wire_len(len)?;
        if len <= 0xf {
            self.put(0x90 | len as u8)
        } else if len <= 0xffff {
            self.put(0xdc)?;
            let ok = be::write_u16(&mut self.writer, len as u16);
            self.check(ok)
        } else {
            self.put(0xdd)?;
            let ok = be::write_u32(&mut self.writer, len);
            self.check(ok)
        }
    }

    pub fn write_array(&mut self, items: &[PackValue]) -> Result<(), EncodeError> {
        self.write_array_header(items.len())?;
        for item in items {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map_header(&mut self, len: usize) -> Result<(), EncodeError> {
        let len = Self::wire_len(len)?;
        if len <= 0xf {
            self.put(0x80 | len as u8)
        } else if len <= 0xffff {
            self.put(0xde)?;
            let ok = be::write_u16(&mut self.writer, len as u16);
            self.check(ok)
        } else {
            self.put(0xdf)?;
            let ok = be::write_u32(&mut self.writer, len);
            self.check(ok)
        }
    }

    pub fn write_map(&mut self, map: &OrderedMap<PackValue, PackValue>) -> Result<(), EncodeError> {
        self.write_map_header(map.len())?;
        for (key, value) in map {
            self.write_any(key)?;
            self.write_any(value)?;
        }
        Ok(())
    }

    /// Extension header: payloads of exactly 1/2/4/8/16 bytes take the
    /// fixext forms, everything else the smallest length-prefixed form.
    /// The type byte follows the header in all cases.
    pub fn write_ext_header(&mut self, code: i8, len: usize) -> Result<(), EncodeError> {
        match len {
            1 => self.put(0xd4)?,
            2 => self.put(0xd5)?,
            4 => self.put(0xd6)?,
            8 => self.put(0xd7)?,
            16 => self.put(0xd8)?,
            _ => {
                let len = Self::wire_len(len)?;
                if len <= 0xff {
                    self.put(0xc7)?;
                    let ok = be::write_u8(&mut self.writer, len as u8);
                    self.check(ok)?;
                } else if len <= 0xffff {
                    self.put(0xc8)?;
                    let ok = be::write_u16(&mut self.writer, len as u16);
                    self.check(ok)?;
                } else {
                    self.put(0xc9)?;
                    let ok = be::write_u32(&mut self.writer, len);
                    self.check(ok)?;
                }
            }
        }
        self.put(code as u8)
    }

    pub fn write_ext(&mut self, ext: &PackExtension) -> Result<(), EncodeError> {
        self.write_ext_header(ext.code, ext.data.len())?;
        self.put_all(&ext.data)
    }
}
