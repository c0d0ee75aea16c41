//! The dynamic value tree the codec operates over.

use std::cmp::Ordering;

use crate::{OrderedMap, PackExtension, PackStr};

/// Stable tag identifying the active [`PackValue`] variant.
///
/// The numeric values are part of the API: total ordering of values
/// compares these tags before payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PackType {
    Nil = 0,
    Bool = 1,
    Int = 2,
    UInt = 3,
    Float32 = 4,
    Float64 = 5,
    Str = 6,
    Bin = 7,
    Array = 8,
    Map = 9,
    Ext = 10,
}

/// A dynamic MessagePack value.
///
/// `Int` and `UInt` are distinct variants: the decoder maps uint-tagged
/// wire bytes (including positive fixint) to `UInt` and int-tagged bytes
/// to `Int`, and the two never compare equal.
///
/// Values are totally ordered, first by [`PackType`] tag and then by
/// payload, so a `PackValue` can key an [`OrderedMap`]. Floats order with
/// `total_cmp` and equate bitwise; in particular `NaN == NaN` for the same
/// bit pattern and `0.0 != -0.0`.
///
/// `Str` carries a [`PackStr`]: UTF-8 by convention, raw bytes by
/// contract. The codec never validates str payloads.
#[derive(Debug, Clone, Default)]
pub enum PackValue {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float32(f32),
    Float64(f64),
    Str(PackStr),
    Bin(Vec<u8>),
    Array(Vec<PackValue>),
    Map(OrderedMap<PackValue, PackValue>),
    Ext(PackExtension),
}

macro_rules! accessors {
    ($is:ident, $try:ident, $as:ident, $variant:ident, $ty:ty, copy) => {
        pub fn $is(&self) -> bool {
            matches!(self, PackValue::$variant(_))
        }

        pub fn $try(&self) -> Option<$ty> {
            match self {
                PackValue::$variant(v) => Some(*v),
                _ => None,
            }
        }

        /// # Panics
        ///
        /// Panics if the value holds a different variant.
        pub fn $as(&self) -> $ty {
            match self {
                PackValue::$variant(v) => *v,
                other => panic!(
                    concat!("called `", stringify!($as), "` on a {:?} value"),
                    other.pack_type()
                ),
            }
        }
    };
    ($is:ident, $try:ident, $try_mut:ident, $as:ident, $as_mut:ident, $variant:ident, $ty:ty) => {
        pub fn $is(&self) -> bool {
            matches!(self, PackValue::$variant(_))
        }

        pub fn $try(&self) -> Option<&$ty> {
            match self {
                PackValue::$variant(v) => Some(v),
                _ => None,
            }
        }

        pub fn $try_mut(&mut self) -> Option<&mut $ty> {
            match self {
                PackValue::$variant(v) => Some(v),
                _ => None,
            }
        }

        /// # Panics
        ///
        /// Panics if the value holds a different variant.
        pub fn $as(&self) -> &$ty {
            match self {
                PackValue::$variant(v) => v,
                other => panic!(
                    concat!("called `", stringify!($as), "` on a {:?} value"),
                    other.pack_type()
                ),
            }
        }

        /// # Panics
        ///
        /// Panics if the value holds a different variant.
        pub fn $as_mut(&mut self) -> &mut $ty {
            match self {
                PackValue::$variant(v) => v,
                other => panic!(
                    concat!("called `", stringify!($as_mut), "` on a {:?} value"),
                    other.pack_type()
                ),
            }
        }
    };
}

impl PackValue {
    /// Returns the tag of the active variant.
    pub fn pack_type(&self) -> PackType {
        match self {
            PackValue::Nil => PackType::Nil,
            PackValue::Bool(_) => PackType::Bool,
            PackValue::Int(_) => PackType::Int,
            PackValue::UInt(_) => PackType::UInt,
            PackValue::Float32(_) => PackType::Float32,
            PackValue::Float64(_) => PackType::Float64,
            PackValue::Str(_) => PackType::Str,
            PackValue::Bin(_) => PackType::Bin,
            PackValue::Array(_) => PackType::Array,
            PackValue::Map(_) => PackType::Map,
            PackValue::Ext(_) => PackType::Ext,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, PackValue::Nil)
    }

    accessors!(is_bool, try_bool, as_bool, Bool, bool, copy);
    accessors!(is_int, try_int, as_int, Int, i64, copy);
    accessors!(is_uint, try_uint, as_uint, UInt, u64, copy);
    accessors!(is_float32, try_float32, as_float32, Float32, f32, copy);
    accessors!(is_float64, try_float64, as_float64, Float64, f64, copy);
    accessors!(is_str, try_str, try_str_mut, as_str, as_str_mut, Str, PackStr);
    accessors!(is_bin, try_bin, try_bin_mut, as_bin, as_bin_mut, Bin, Vec<u8>);
    accessors!(
        is_array,
        try_array,
        try_array_mut,
        as_array,
        as_array_mut,
        Array,
        Vec<PackValue>
    );
    accessors!(
        is_map,
        try_map,
        try_map_mut,
        as_map,
        as_map_mut,
        Map,
        OrderedMap<PackValue, PackValue>
    );
    accessors!(
        is_ext,
        try_ext,
        try_ext_mut,
        as_ext,
        as_ext_mut,
        Ext,
        PackExtension
    );
}

impl PartialEq for PackValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackValue {}

impl PartialOrd for PackValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use PackValue::*;
        match (self, other) {
            (Nil, Nil) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (UInt(a), UInt(b)) => a.cmp(b),
            (Float32(a), Float32(b)) => a.total_cmp(b),
            (Float64(a), Float64(b)) => a.total_cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Bin(a), Bin(b)) => a.cmp(b),
            (Array(a), Array(b)) => a.cmp(b),
            (Map(a), Map(b)) => a.cmp(b),
            (Ext(a), Ext(b)) => a.cmp(b),
            _ => self.pack_type().cmp(&other.pack_type()),
        }
    }
}

impl From<bool> for PackValue {
    fn from(v: bool) -> Self {
        PackValue::Bool(v)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for PackValue {
            fn from(v: $ty) -> Self {
                PackValue::Int(v as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for PackValue {
            fn from(v: $ty) -> Self {
                PackValue::UInt(v as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<f32> for PackValue {
    fn from(v: f32) -> Self {
        PackValue::Float32(v)
    }
}

impl From<f64> for PackValue {
    fn from(v: f64) -> Self {
        PackValue::Float64(v)
    }
}

impl From<&str> for PackValue {
    fn from(v: &str) -> Self {
        PackValue::Str(v.into())
    }
}

impl From<String> for PackValue {
    fn from(v: String) -> Self {
        PackValue::Str(v.into())
    }
}

impl From<PackStr> for PackValue {
    fn from(v: PackStr) -> Self {
        PackValue::Str(v)
    }
}

impl From<Vec<u8>> for PackValue {
    fn from(v: Vec<u8>) -> Self {
        PackValue::Bin(v)
    }
}

impl From<Vec<PackValue>> for PackValue {
    fn from(v: Vec<PackValue>) -> Self {
        PackValue::Array(v)
    }
}

impl From<OrderedMap<PackValue, PackValue>> for PackValue {
    fn from(v: OrderedMap<PackValue, PackValue>) -> Self {
        PackValue::Map(v)
    }
}

impl From<PackExtension> for PackValue {
    fn from(v: PackExtension) -> Self {
        PackValue::Ext(v)
    }
}
