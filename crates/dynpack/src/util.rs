//! Convenience encode/decode helpers over in-memory buffers.

use dynpack_buffers::{Reader, Writer};

use crate::{
    DecodeError, EncodeError, MsgPackDecoder, MsgPackEncoder, MsgPackEncoderStable, PackValue,
};

/// Encodes `value` into a fresh byte vector.
pub fn encode(value: &PackValue) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = MsgPackEncoder::new(Writer::new());
    encoder.encode(value)?;
    Ok(encoder.writer.flush())
}

/// Encodes `value` with map keys sorted (see
/// [`MsgPackEncoderStable`]).
pub fn encode_stable(value: &PackValue) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = MsgPackEncoderStable::new(Writer::new());
    encoder.encode(value)?;
    Ok(encoder.into_writer().flush())
}

/// Decodes one value from `blob`.
pub fn decode(blob: &[u8]) -> Result<PackValue, DecodeError> {
    let mut decoder = MsgPackDecoder::new(Reader::new(blob));
    decoder.decode()
}
