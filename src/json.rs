//! JSON document adapter
//!
//! Converts between byte buffers and records through hand-written serde
//! impls instead of `serde_json::Map`, so field order and duplicate keys
//! pass through unchanged in both directions, the same way the CBOR adapter
//! behaves. Number shape survives too: `serde_json` tracks whether a number
//! arrived as an integer or a float.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use crate::error::{Result, SenMLError};
use crate::record::{FieldKey, Leaf, Record};

/// Decode a whole message: a JSON array of record objects
pub fn decode_pack(bytes: &[u8]) -> Result<Vec<Record>> {
    let records: Vec<JsonRecordDe> =
        serde_json::from_slice(bytes).map_err(|e| SenMLError::decode(e.to_string()))?;
    Ok(records.into_iter().map(|JsonRecordDe(r)| r).collect())
}

/// Decode a single record object
pub fn decode_record(bytes: &[u8]) -> Result<Record> {
    let JsonRecordDe(record) =
        serde_json::from_slice(bytes).map_err(|e| SenMLError::decode(e.to_string()))?;
    Ok(record)
}

/// Encode the whole store as a JSON array
pub fn encode_pack(records: &[Record]) -> Result<Vec<u8>> {
    serde_json::to_vec(&JsonPackSer(records)).map_err(|e| SenMLError::encode(e.to_string()))
}

/// Encode one record as a JSON object
pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    serde_json::to_vec(&JsonRecordSer(record)).map_err(|e| SenMLError::encode(e.to_string()))
}

struct JsonPackSer<'a>(&'a [Record]);

impl Serialize for JsonPackSer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(JsonRecordSer))
    }
}

struct JsonRecordSer<'a>(&'a Record);

impl Serialize for JsonRecordSer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::Error;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, leaf) in self.0.iter() {
            let FieldKey::Text(name) = key else {
                return Err(S::Error::custom("JSON records use text keys only"));
            };
            match leaf {
                Leaf::Text(s) => map.serialize_entry(name, s)?,
                Leaf::Bool(b) => map.serialize_entry(name, b)?,
                Leaf::Int(i) => map.serialize_entry(name, i)?,
                Leaf::Float(f) if f.is_finite() => map.serialize_entry(name, f)?,
                Leaf::Float(_) => {
                    return Err(S::Error::custom(format!(
                        "non-finite number for field \"{name}\""
                    )));
                }
            }
        }
        map.end()
    }
}

struct JsonRecordDe(Record);

impl<'de> Deserialize<'de> for JsonRecordDe {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = JsonRecordDe;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object record")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<JsonRecordDe, A::Error> {
                use serde::de::Error;

                let mut record = Record::new();
                while let Some((key, value)) = access.next_entry::<String, JsonValue>()? {
                    let leaf = match value {
                        JsonValue::String(s) => Leaf::Text(s),
                        JsonValue::Bool(b) => Leaf::Bool(b),
                        JsonValue::Number(n) => {
                            number_to_leaf(&n, &key).map_err(A::Error::custom)?
                        }
                        _ => {
                            return Err(A::Error::custom(format!(
                                "unsupported value for field \"{key}\": records hold only primitive leaves"
                            )));
                        }
                    };
                    record.push(FieldKey::Text(key), leaf);
                }
                Ok(JsonRecordDe(record))
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

fn number_to_leaf(number: &Number, key: &str) -> Result<Leaf> {
    if let Some(i) = number.as_i64() {
        Ok(Leaf::Int(i))
    } else if let Some(f) = number.as_f64() {
        Ok(Leaf::Float(f))
    } else {
        Err(SenMLError::decode(format!(
            "number out of range for field \"{key}\""
        )))
    }
}
