//! CBOR document adapter
//!
//! Converts between byte buffers and records via `ciborium::value::Value`.
//! ciborium's map model is a plain vector of entry pairs, so field order
//! survives the trip through the wire without extra bookkeeping. Map keys
//! are integers for the RFC 8428 label mapping; text keys decode as
//! unregistered fields.

use ciborium::value::{Integer, Value as CborValue};

use crate::error::{Result, SenMLError};
use crate::record::{FieldKey, Leaf, Record};

/// Decode a whole message: a CBOR array of record maps
pub fn decode_pack(bytes: &[u8]) -> Result<Vec<Record>> {
    let value: CborValue =
        ciborium::de::from_reader(bytes).map_err(|e| SenMLError::decode(e.to_string()))?;

    let CborValue::Array(items) = value else {
        return Err(SenMLError::decode("expected a top-level CBOR array"));
    };

    items.iter().map(record_from_map).collect()
}

/// Decode a single record map
pub fn decode_record(bytes: &[u8]) -> Result<Record> {
    let value: CborValue =
        ciborium::de::from_reader(bytes).map_err(|e| SenMLError::decode(e.to_string()))?;
    record_from_map(&value)
}

/// Encode the whole store as a CBOR array
pub fn encode_pack(records: &[Record]) -> Result<Vec<u8>> {
    let items = records.iter().map(record_to_map).collect::<Vec<_>>();
    write_value(&CborValue::Array(items))
}

/// Encode one record as a CBOR map
pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    write_value(&record_to_map(record))
}

fn write_value(value: &CborValue) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    ciborium::ser::into_writer(value, &mut buffer)
        .map_err(|e| SenMLError::encode(e.to_string()))?;
    Ok(buffer)
}

fn record_from_map(value: &CborValue) -> Result<Record> {
    let CborValue::Map(entries) = value else {
        return Err(SenMLError::decode("expected a CBOR map record"));
    };

    let mut record = Record::new();
    for (key, field) in entries {
        let key = match key {
            CborValue::Integer(i) => FieldKey::Int(integer_to_i64(*i)?),
            CborValue::Text(s) => FieldKey::Text(s.clone()),
            _ => return Err(SenMLError::decode("record keys must be integers or text")),
        };
        let leaf = match field {
            CborValue::Text(s) => Leaf::Text(s.clone()),
            CborValue::Bool(b) => Leaf::Bool(*b),
            CborValue::Integer(i) => Leaf::Int(integer_to_i64(*i)?),
            CborValue::Float(f) => Leaf::Float(*f),
            _ => {
                return Err(SenMLError::decode(
                    "unsupported field value: records hold only primitive leaves",
                ));
            }
        };
        record.push(key, leaf);
    }

    Ok(record)
}

fn integer_to_i64(value: Integer) -> Result<i64> {
    i64::try_from(i128::from(value)).map_err(|_| SenMLError::decode("integer out of range"))
}

fn record_to_map(record: &Record) -> CborValue {
    let entries = record
        .iter()
        .map(|(key, leaf)| {
            let key = match key {
                FieldKey::Int(i) => CborValue::Integer(Integer::from(*i)),
                FieldKey::Text(s) => CborValue::Text(s.clone()),
            };
            let value = match leaf {
                Leaf::Text(s) => CborValue::Text(s.clone()),
                Leaf::Bool(b) => CborValue::Bool(*b),
                Leaf::Int(i) => CborValue::Integer(Integer::from(*i)),
                Leaf::Float(f) => CborValue::Float(*f),
            };
            (key, value)
        })
        .collect();
    CborValue::Map(entries)
}
