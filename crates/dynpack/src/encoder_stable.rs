//! MessagePack encoder with sorted map keys.

use dynpack_buffers::ByteSink;

use crate::{EncodeError, MsgPackEncoder, OrderedMap, PackValue};

/// Encodes the same wire format as [`MsgPackEncoder`] but writes map
/// entries sorted by key, so logically equal maps produce identical bytes
/// regardless of insertion order.
///
/// Keys sort by the value total order (variant tag, then payload). Arrays
/// recurse through the stable writer so nested maps are stabilised too.
pub struct MsgPackEncoderStable<W: ByteSink> {
    pub inner: MsgPackEncoder<W>,
}

impl<W: ByteSink> MsgPackEncoderStable<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: MsgPackEncoder::new(writer),
        }
    }

    pub fn into_writer(self) -> W {
        self.inner.into_writer()
    }

    pub fn encode(&mut self, value: &PackValue) -> Result<(), EncodeError> {
        self.write_any(value)
    }

    pub fn write_any(&mut self, value: &PackValue) -> Result<(), EncodeError> {
        match value {
            PackValue::Map(map) => self.write_map_sorted(map),
            PackValue::Array(items) => {
                self.inner.write_array_header(items.len())?;
                for item in items {
                    self.write_any(item)?;
                }
                Ok(())
            }
            other => self.inner.write_any(other),
        }
    }

    fn write_map_sorted(
        &mut self,
        map: &OrderedMap<PackValue, PackValue>,
    ) -> Result<(), EncodeError> {
        let entries = map.entries();
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| entries[a].0.cmp(&entries[b].0));

        self.inner.write_map_header(entries.len())?;
        for i in order {
            let (key, value) = &entries[i];
            self.write_any(key)?;
            self.write_any(value)?;
        }
        Ok(())
    }
}
