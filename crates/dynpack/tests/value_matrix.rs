use std::cmp::Ordering;

use dynpack::{OrderedMap, PackExtension, PackStr, PackType, PackValue};

#[test]
fn default_is_nil() {
    let value = PackValue::default();
    assert!(value.is_nil());
    assert_eq!(value.pack_type(), PackType::Nil);
}

#[test]
fn native_constructors_route_by_signedness() {
    assert_eq!(PackValue::from(true), PackValue::Bool(true));
    assert_eq!(PackValue::from(-5i8), PackValue::Int(-5));
    assert_eq!(PackValue::from(-5i64), PackValue::Int(-5));
    assert_eq!(PackValue::from(5u8), PackValue::UInt(5));
    assert_eq!(PackValue::from(5u64), PackValue::UInt(5));
    assert_eq!(PackValue::from(1.5f32), PackValue::Float32(1.5));
    assert_eq!(PackValue::from(1.5f64), PackValue::Float64(1.5));
    assert_eq!(PackValue::from("text"), PackValue::Str("text".into()));
    assert_eq!(
        PackValue::from(String::from("text")),
        PackValue::Str("text".into())
    );
    assert_eq!(PackValue::from(vec![1u8, 2]), PackValue::Bin(vec![1, 2]));
    assert_eq!(
        PackValue::from(vec![PackValue::Nil]),
        PackValue::Array(vec![PackValue::Nil])
    );
    assert_eq!(
        PackValue::from(PackExtension::new(9, vec![1])),
        PackValue::Ext(PackExtension::new(9, vec![1]))
    );
}

#[test]
fn predicates_match_active_variant() {
    let value = PackValue::Str("x".into());
    assert!(value.is_str());
    assert!(!value.is_nil());
    assert!(!value.is_bin());

    assert!(PackValue::Nil.is_nil());
    assert!(PackValue::Bool(false).is_bool());
    assert!(PackValue::Int(-1).is_int());
    assert!(PackValue::UInt(1).is_uint());
    assert!(PackValue::Float32(0.0).is_float32());
    assert!(PackValue::Float64(0.0).is_float64());
    assert!(PackValue::Bin(vec![]).is_bin());
    assert!(PackValue::Array(vec![]).is_array());
    assert!(PackValue::Map(OrderedMap::new()).is_map());
    assert!(PackValue::Ext(PackExtension::default()).is_ext());
}

#[test]
fn typed_accessors() {
    let mut value = PackValue::Array(vec![PackValue::UInt(7)]);
    assert_eq!(value.as_array().len(), 1);
    assert_eq!(value.try_array().map(Vec::len), Some(1));
    assert_eq!(value.try_int(), None);
    assert_eq!(value.try_map(), None);

    value.as_array_mut().push(PackValue::Nil);
    assert_eq!(value.as_array().len(), 2);

    let mut text = PackValue::Str("ab".into());
    assert_eq!(text.as_str().as_utf8(), Some("ab"));
    *text.try_str_mut().unwrap() = "abc".into();
    assert_eq!(text.as_str(), &PackStr::from("abc"));

    assert_eq!(PackValue::Int(-3).as_int(), -3);
    assert_eq!(PackValue::UInt(3).as_uint(), 3);
    assert_eq!(PackValue::Bool(true).as_bool(), true);
    assert_eq!(PackValue::Float64(2.5).as_float64(), 2.5);
}

#[test]
#[should_panic(expected = "called `as_int`")]
fn wrong_variant_accessor_panics() {
    PackValue::Str("nope".into()).as_int();
}

#[test]
fn int_and_uint_are_distinct_variants() {
    assert_ne!(PackValue::Int(1), PackValue::UInt(1));
    assert_ne!(PackValue::Int(0), PackValue::UInt(0));
    // Ordering puts every Int before every UInt (variant tag 2 vs 3).
    assert!(PackValue::Int(i64::MAX) < PackValue::UInt(0));
}

#[test]
fn total_order_compares_variant_tag_first() {
    let ladder = vec![
        PackValue::Nil,
        PackValue::Bool(true),
        PackValue::Int(i64::MAX),
        PackValue::UInt(0),
        PackValue::Float32(f32::NEG_INFINITY),
        PackValue::Float64(f64::NEG_INFINITY),
        PackValue::Str(PackStr::default()),
        PackValue::Bin(vec![]),
        PackValue::Array(vec![]),
        PackValue::Map(OrderedMap::new()),
        PackValue::Ext(PackExtension::default()),
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
    }
}

#[test]
fn payload_order_within_variant() {
    assert!(PackValue::Int(-5) < PackValue::Int(3));
    assert!(PackValue::Str("abc".into()) < PackValue::Str("abd".into()));
    // Str payloads order byte-wise, valid UTF-8 or not.
    assert!(PackValue::Str("z".into()) < PackValue::Str(PackStr::new(vec![0xff])));
    assert!(PackValue::Bin(vec![1]) < PackValue::Bin(vec![1, 0]));
    assert!(PackValue::Bool(false) < PackValue::Bool(true));
    assert!(
        PackValue::Array(vec![PackValue::UInt(1)])
            < PackValue::Array(vec![PackValue::UInt(1), PackValue::Nil])
    );
    assert_eq!(
        PackValue::Ext(PackExtension::new(1, vec![2])).cmp(&PackValue::Ext(PackExtension::new(
            1,
            vec![2]
        ))),
        Ordering::Equal
    );
}

#[test]
fn float_order_is_total() {
    assert!(PackValue::Float64(-0.0) < PackValue::Float64(0.0));
    assert_ne!(PackValue::Float64(-0.0), PackValue::Float64(0.0));
    assert_eq!(PackValue::Float64(f64::NAN), PackValue::Float64(f64::NAN));
    assert!(PackValue::Float64(f64::INFINITY) < PackValue::Float64(f64::NAN));
    assert!(PackValue::Float32(1.0) < PackValue::Float32(2.0));
}

#[test]
fn deep_equality() {
    let build = || {
        let mut inner = OrderedMap::new();
        inner
            .push_back(PackValue::from("k"), PackValue::from(-1i64))
            .unwrap();
        PackValue::Array(vec![PackValue::Map(inner), PackValue::Bin(vec![9])])
    };
    assert_eq!(build(), build());

    let mut other = build();
    other.as_array_mut().push(PackValue::Nil);
    assert_ne!(build(), other);
}

#[test]
fn values_key_an_ordered_map() {
    let mut map = OrderedMap::new();
    let composite = PackValue::Array(vec![PackValue::UInt(1), PackValue::Str("x".into())]);
    map.push_back(composite.clone(), PackValue::Bool(true)).unwrap();
    map.push_back(PackValue::Nil, PackValue::Bool(false)).unwrap();
    assert_eq!(map.find(&composite), Some(0));
    assert_eq!(map.get(&PackValue::Nil), Some(&PackValue::Bool(false)));
}

#[test]
fn clone_is_deep() {
    let mut original = PackValue::Array(vec![PackValue::Str("a".into())]);
    let copy = original.clone();
    original.as_array_mut()[0] = PackValue::Nil;
    assert_eq!(copy.as_array()[0], PackValue::Str("a".into()));
}
