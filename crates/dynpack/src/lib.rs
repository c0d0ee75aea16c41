//! Dynamic-value MessagePack codec.
//!
//! Producers build a [`PackValue`] tree, hand it to the encoder, and get a
//! canonical (minimal-length) MessagePack byte stream; consumers pull bytes
//! from a [`ByteSource`](dynpack_buffers::ByteSource) and get the tree
//! back. Maps are insertion-ordered sequences of unique-keyed pairs
//! ([`OrderedMap`]), matching what MessagePack maps actually are on the
//! wire.
//!
//! ```
//! use dynpack::{decode, encode, OrderedMap, PackValue};
//!
//! let mut map = OrderedMap::new();
//! map.push_back(PackValue::from("a"), PackValue::from(1u64)).unwrap();
//! map.push_back(PackValue::from("b"), PackValue::from(2u64)).unwrap();
//!
//! let bytes = encode(&PackValue::Map(map)).unwrap();
//! assert_eq!(bytes, [0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0x02]);
//!
//! let value = decode(&bytes).unwrap();
//! let keys: Vec<_> = value.as_map().keys().collect();
//! assert_eq!(keys, [&PackValue::from("a"), &PackValue::from("b")]);
//! ```

mod be;
mod decoder;
mod encoder;
mod encoder_stable;
mod error;
mod extension;
mod flat_map;
mod json;
mod ordered_map;
mod pack_str;
mod util;
mod value;

pub use decoder::{MsgPackDecoder, DEFAULT_MAX_DEPTH};
pub use encoder::MsgPackEncoder;
pub use encoder_stable::MsgPackEncoderStable;
pub use error::{DecodeError, EncodeError, MapError};
pub use extension::PackExtension;
pub use flat_map::FlatMap;
pub use ordered_map::OrderedMap;
pub use pack_str::PackStr;
pub use util::{decode, encode, encode_stable};
pub use value::{PackType, PackValue};
