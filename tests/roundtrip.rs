//! Round-trip and cross-encoding properties

use senml_pack::{Encoding, Label, Pair, SenMLPack, Value};

const EPSILON: f64 = f64::EPSILON; // ulp(1.0)

fn sample_pairs() -> Vec<Pair> {
    vec![
        Label::BaseName.with_value("mac:urn:dev:3290329032").unwrap(),
        Label::BaseVersion.with_value(10).unwrap(),
        Label::Name.with_value("temperature").unwrap(),
        Label::Unit.with_value("Cel").unwrap(),
        Label::Value.with_value(22.5).unwrap(),
        Label::BooleanValue.with_value(true).unwrap(),
        Label::Sum.with_value(3040.201).unwrap(),
        Label::Time.with_value(0.0).unwrap(),
        Label::UpdateTime.with_value(0.01).unwrap(),
    ]
}

fn assert_values_match(pack: &SenMLPack, index: usize, pairs: &[Pair]) {
    for pair in pairs {
        let read = pack.value(pair.label(), index).unwrap();
        match (pair.value(), &read) {
            (Value::Double(expected), Value::Double(actual)) => {
                assert!(
                    (expected - actual).abs() <= EPSILON,
                    "{}: {expected} != {actual}",
                    pair.label()
                );
            }
            _ => assert_eq!(pair.value(), &read, "{}", pair.label()),
        }
    }
}

#[test]
fn built_pack_round_trips_through_json() {
    let pairs = sample_pairs();
    let mut pack = SenMLPack::json();
    pack.add_record(pairs.clone());

    let bytes = pack.to_bytes().unwrap();
    let decoded = SenMLPack::from_json_slice(&bytes).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_values_match(&decoded, 0, &pairs);
}

#[test]
fn built_pack_round_trips_through_cbor() {
    let pairs = sample_pairs();
    let mut pack = SenMLPack::cbor();
    pack.add_record(pairs.clone());

    let bytes = pack.to_bytes().unwrap();
    let decoded = SenMLPack::from_cbor_slice(&bytes).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_values_match(&decoded, 0, &pairs);
}

#[test]
fn json_decode_reencode_is_byte_identical() {
    let input: &[u8] =
        br#"[{"bn":"mac:urn:dev:3290","v":30.0,"vb":false},{"bn":"hello","ut":0.01,"bt":0.0,"bu":"Watt"},{"bver":0,"s":3040.201}]"#;
    let pack = SenMLPack::from_json_slice(input).unwrap();
    assert_eq!(pack.to_bytes().unwrap(), input);
}

#[test]
fn cbor_decode_reencode_is_byte_identical() {
    // Canonical form is whatever this encoder itself produces
    let mut pack = SenMLPack::cbor();
    pack.add_record(sample_pairs());
    let bytes = pack.to_bytes().unwrap();

    let decoded = SenMLPack::from_cbor_slice(&bytes).unwrap();
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
}

#[test]
fn cross_encoding_equivalence() {
    let pairs = sample_pairs();

    let mut json_pack = SenMLPack::json();
    json_pack.add_record(pairs.clone());
    let mut cbor_pack = SenMLPack::cbor();
    cbor_pack.add_record(pairs.clone());

    let from_json = SenMLPack::from_json_slice(&json_pack.to_bytes().unwrap()).unwrap();
    let from_cbor = SenMLPack::from_cbor_slice(&cbor_pack.to_bytes().unwrap()).unwrap();

    for pair in &pairs {
        let a = from_json.value(pair.label(), 0).unwrap();
        let b = from_cbor.value(pair.label(), 0).unwrap();
        match (&a, &b) {
            (Value::Double(x), Value::Double(y)) => {
                assert!((x - y).abs() <= EPSILON, "{}: {x} != {y}", pair.label());
            }
            _ => assert_eq!(a, b, "{}", pair.label()),
        }
    }

    assert_eq!(from_json.labels(0).unwrap(), from_cbor.labels(0).unwrap());
}

#[test]
fn raw_append_coexists_with_built_records() {
    for encoding in [Encoding::Json, Encoding::Cbor] {
        // Pre-encode a single record through a scratch pack
        let mut scratch = SenMLPack::new(encoding);
        scratch.add_record([
            Label::BaseName.with_value("hello3").unwrap(),
            Label::Value.with_value(35.0).unwrap(),
        ]);
        let raw = scratch.record_bytes(0).unwrap();

        let mut pack = SenMLPack::new(encoding);
        pack.add_record([
            Label::BaseName.with_value("hello2").unwrap(),
            Label::Value.with_value(20.0).unwrap(),
        ]);
        pack.add_record_slice(&raw).unwrap();

        assert_eq!(pack.len(), 2);
        assert_eq!(
            pack.value(Label::BaseName, 0).unwrap(),
            Value::String("hello2".into())
        );
        assert_eq!(pack.value(Label::Value, 0).unwrap(), Value::Double(20.0));
        assert_eq!(
            pack.value(Label::BaseName, 1).unwrap(),
            Value::String("hello3".into())
        );
        assert_eq!(pack.value(Label::Value, 1).unwrap(), Value::Double(35.0));
    }
}

#[test]
fn field_order_survives_encode_decode() {
    let mut pack = SenMLPack::json();
    pack.add_record([
        Label::Unit.with_value("dB").unwrap(),
        Label::BaseName.with_value("dev").unwrap(),
        Label::Value.with_value(1.0).unwrap(),
    ]);

    let decoded = SenMLPack::from_json_slice(&pack.to_bytes().unwrap()).unwrap();
    assert_eq!(
        decoded.labels(0).unwrap(),
        vec![Label::Unit, Label::BaseName, Label::Value]
    );
}

#[test]
fn duplicate_labels_survive_both_encodings() {
    for encoding in [Encoding::Json, Encoding::Cbor] {
        let mut pack = SenMLPack::new(encoding);
        pack.add_record([
            Label::Value.with_value(1.0).unwrap(),
            Label::Value.with_value(2.0).unwrap(),
        ]);

        let decoded = SenMLPack::from_slice(encoding, &pack.to_bytes().unwrap()).unwrap();
        assert_eq!(
            decoded.labels(0).unwrap(),
            vec![Label::Value, Label::Value]
        );
        // Reads resolve to the first field with the key
        assert_eq!(decoded.value(Label::Value, 0).unwrap(), Value::Double(1.0));
    }
}

#[test]
fn integer_width_is_preserved_across_encodings() {
    for encoding in [Encoding::Json, Encoding::Cbor] {
        let mut pack = SenMLPack::new(encoding);
        pack.add_record([Label::BaseVersion.with_value(i32::MAX).unwrap()]);

        let decoded = SenMLPack::from_slice(encoding, &pack.to_bytes().unwrap()).unwrap();
        assert_eq!(
            decoded.value(Label::BaseVersion, 0).unwrap(),
            Value::Integer(i32::MAX)
        );
    }
}
