//! Wire records and the typed accessor over their fields
//!
//! A record is the decoded form of one SenML entry: its fields in wire order,
//! each a key paired with a primitive leaf. Records are immutable once built
//! and owned by the pack that holds them; reads go through the typed accessor,
//! which converts a leaf to the requested label's declared type or fails.

use crate::error::{Result, SenMLError};
use crate::label::{Encoding, Label};
use crate::value::{Value, ValueType};

/// An on-wire field key: text for JSON objects, integer for CBOR maps
///
/// CBOR maps may also carry text keys for fields outside the integer mapping;
/// those decode fine but resolve to no label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// String key
    Text(String),
    /// Integer key
    Int(i64),
}

/// A primitive leaf value as it appeared on the wire
///
/// Float and Int are kept apart so that `30.0` and `30` re-encode the way
/// they arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// Text leaf
    Text(String),
    /// Floating point number leaf
    Float(f64),
    /// Integer number leaf
    Int(i64),
    /// Boolean leaf
    Bool(bool),
}

impl Leaf {
    /// Short kind name for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Leaf::Text(_) => "text",
            Leaf::Float(_) | Leaf::Int(_) => "number",
            Leaf::Bool(_) => "boolean",
        }
    }
}

/// One SenML record: insertion-ordered wire fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(FieldKey, Leaf)>,
}

impl Record {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: FieldKey, leaf: Leaf) {
        self.fields.push((key, leaf));
    }

    /// Look up a field by its wire key
    pub fn get(&self, key: &FieldKey) -> Option<&Leaf> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, leaf)| leaf)
    }

    /// Iterate fields in wire order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &Leaf)> {
        self.fields.iter().map(|(k, v)| (k, v))
    }

    /// Number of fields in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Read the value of `label` as its declared type
    ///
    /// Fails with `FieldNotPresent` when the label's wire key is absent and
    /// with `TypeMismatch` when the leaf does not convert to the declared
    /// type. There is no try-get: an accessor call asserts the field exists.
    pub fn value(&self, label: Label, encoding: Encoding) -> Result<Value> {
        let key = label.wire_key(encoding);
        let leaf = self
            .get(&key)
            .ok_or_else(|| SenMLError::field_not_present(label))?;
        convert(label, leaf)
    }

    /// Labels present in this record, in field order
    ///
    /// One label per registered field, neither sorted nor deduplicated.
    /// Fields whose key is outside the vocabulary are skipped.
    pub fn labels(&self, encoding: Encoding) -> Vec<Label> {
        self.fields
            .iter()
            .filter_map(|(key, _)| Label::from_wire_key(key, encoding))
            .collect()
    }
}

fn convert(label: Label, leaf: &Leaf) -> Result<Value> {
    let expected = label.value_type();
    let mismatch = || SenMLError::type_mismatch(label, expected, leaf.kind());

    match expected {
        ValueType::String => match leaf {
            Leaf::Text(s) => Ok(Value::String(s.clone())),
            _ => Err(mismatch()),
        },
        ValueType::Double => match leaf {
            Leaf::Float(v) => Ok(Value::Double(*v)),
            Leaf::Int(v) => Ok(Value::Double(*v as f64)),
            _ => Err(mismatch()),
        },
        ValueType::Integer => match leaf {
            Leaf::Int(v) => i32::try_from(*v).map(Value::Integer).map_err(|_| mismatch()),
            // An integer-shaped float is an exact integer on the wire
            Leaf::Float(v)
                if v.fract() == 0.0
                    && *v >= f64::from(i32::MIN)
                    && *v <= f64::from(i32::MAX) =>
            {
                Ok(Value::Integer(*v as i32))
            }
            _ => Err(mismatch()),
        },
        ValueType::Boolean => match leaf {
            Leaf::Bool(v) => Ok(Value::Boolean(*v)),
            _ => Err(mismatch()),
        },
    }
}
