//! Big-endian scalar reads and writes shared by the encoder and decoder.
//!
//! Everything goes through `{from,to}_be_bytes`, so the host byte order
//! never leaks into the wire. Floats travel as their IEEE-754 bit
//! patterns.

use dynpack_buffers::{ByteSink, ByteSource};

macro_rules! be_read {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[inline]
        pub(crate) fn $name<S: ByteSource>(source: &mut S) -> Option<$ty> {
            source
                .read_array::<{ std::mem::size_of::<$ty>() }>()
                .map(<$ty>::from_be_bytes)
        }
    )*};
}

macro_rules! be_write {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[inline]
        pub(crate) fn $name<W: ByteSink>(sink: &mut W, value: $ty) -> bool {
            sink.write_bytes(&value.to_be_bytes())
        }
    )*};
}

be_read! {
    read_u8 => u8,
    read_u16 => u16,
    read_u32 => u32,
    read_u64 => u64,
    read_i8 => i8,
    read_i16 => i16,
    read_i32 => i32,
    read_i64 => i64,
    read_f32 => f32,
    read_f64 => f64,
}

be_write! {
    write_u8 => u8,
    write_u16 => u16,
    write_u32 => u32,
    write_u64 => u64,
    write_i8 => i8,
    write_i16 => i16,
    write_i32 => i32,
    write_i64 => i64,
    write_f32 => f32,
    write_f64 => f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynpack_buffers::{Reader, Writer};

    #[test]
    fn test_scalars_roundtrip_big_endian() {
        let mut writer = Writer::new();
        assert!(write_u16(&mut writer, 0x0102));
        assert!(write_i32(&mut writer, -2));
        assert!(write_f64(&mut writer, 1.5));
        let bytes = writer.flush();
        assert_eq!(&bytes[..2], &[0x01, 0x02]);
        assert_eq!(&bytes[2..6], &[0xff, 0xff, 0xff, 0xfe]);
        assert_eq!(&bytes[6..], &1.5f64.to_be_bytes());

        let mut reader = Reader::new(&bytes);
        assert_eq!(read_u16(&mut reader), Some(0x0102));
        assert_eq!(read_i32(&mut reader), Some(-2));
        assert_eq!(read_f64(&mut reader), Some(1.5));
        assert_eq!(read_u8(&mut reader), None);
    }

    #[test]
    fn test_float_bits_survive() {
        let weird = f32::from_bits(0x7fc0_1234);
        let mut writer = Writer::new();
        assert!(write_f32(&mut writer, weird));
        let bytes = writer.flush();
        let mut reader = Reader::new(&bytes);
        assert_eq!(read_f32(&mut reader).map(f32::to_bits), Some(weird.to_bits()));
    }
}
