//! The SenML label vocabulary and its per-encoding wire keys
//!
//! Every label defined by RFC 8428 carries a declared value type and two
//! on-wire keys: a short string for JSON and a small integer for CBOR.
//! The vocabulary is closed; lookups in either direction are plain matches
//! over the enum, so there is nothing to initialize at runtime.

use std::fmt;

use crate::record::FieldKey;
use crate::value::ValueType;

/// Wire format of a pack, fixed when the pack is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// SenML JSON (application/senml+json)
    Json,
    /// SenML CBOR (application/senml+cbor)
    Cbor,
}

/// A SenML field label
///
/// "value", "string value" and "boolean value" are distinct labels, not
/// overloads of one another, even though several labels share a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Base Version (`bver` / -1) - SenML version number
    BaseVersion,
    /// Base Name (`bn` / -2) - prepended to record names
    BaseName,
    /// Base Time (`bt` / -3) - added to record timestamps
    BaseTime,
    /// Base Unit (`bu` / -4) - used when a record has no unit
    BaseUnit,
    /// Base Value (`bv` / -5) - added to numeric record values
    BaseValue,
    /// Base Sum (`bs` / -6) - added to sum values
    BaseSum,
    /// Name (`n` / 0) - identifies the sensor or parameter
    Name,
    /// Unit (`u` / 1) - SI unit or custom unit string
    Unit,
    /// Value (`v` / 2) - numeric measurement value
    Value,
    /// String Value (`vs` / 3) - textual measurement value
    StringValue,
    /// Boolean Value (`vb` / 4) - true/false measurement value
    BooleanValue,
    /// Sum (`s` / 5) - integrated sum of values over time
    Sum,
    /// Time (`t` / 6) - timestamp relative to base time
    Time,
    /// Update Time (`ut` / 7) - maximum time before next update
    UpdateTime,
    /// Data Value (`vd` / 8) - base64-encoded binary data
    DataValue,
}

impl Label {
    /// Every label in the vocabulary, in RFC 8428 table order
    pub const ALL: [Label; 15] = [
        Label::BaseVersion,
        Label::BaseName,
        Label::BaseTime,
        Label::BaseUnit,
        Label::BaseValue,
        Label::BaseSum,
        Label::Name,
        Label::Unit,
        Label::Value,
        Label::StringValue,
        Label::BooleanValue,
        Label::Sum,
        Label::Time,
        Label::UpdateTime,
        Label::DataValue,
    ];

    /// Canonical identifier for this label
    pub fn name(&self) -> &'static str {
        match self {
            Label::BaseVersion => "BASE_VERSION",
            Label::BaseName => "BASE_NAME",
            Label::BaseTime => "BASE_TIME",
            Label::BaseUnit => "BASE_UNIT",
            Label::BaseValue => "BASE_VALUE",
            Label::BaseSum => "BASE_SUM",
            Label::Name => "NAME",
            Label::Unit => "UNIT",
            Label::Value => "VALUE",
            Label::StringValue => "STRING_VALUE",
            Label::BooleanValue => "BOOLEAN_VALUE",
            Label::Sum => "SUM",
            Label::Time => "TIME",
            Label::UpdateTime => "UPDATE_TIME",
            Label::DataValue => "DATA_VALUE",
        }
    }

    /// Declared value type; reads and writes of this label dispatch on it
    pub fn value_type(&self) -> ValueType {
        match self {
            Label::BaseName
            | Label::BaseUnit
            | Label::Name
            | Label::Unit
            | Label::StringValue
            | Label::DataValue => ValueType::String,
            Label::BaseTime
            | Label::BaseValue
            | Label::BaseSum
            | Label::Value
            | Label::Sum
            | Label::Time
            | Label::UpdateTime => ValueType::Double,
            Label::BaseVersion => ValueType::Integer,
            Label::BooleanValue => ValueType::Boolean,
        }
    }

    /// On-wire key for the JSON encoding
    pub fn json_key(&self) -> &'static str {
        match self {
            Label::BaseVersion => "bver",
            Label::BaseName => "bn",
            Label::BaseTime => "bt",
            Label::BaseUnit => "bu",
            Label::BaseValue => "bv",
            Label::BaseSum => "bs",
            Label::Name => "n",
            Label::Unit => "u",
            Label::Value => "v",
            Label::StringValue => "vs",
            Label::BooleanValue => "vb",
            Label::Sum => "s",
            Label::Time => "t",
            Label::UpdateTime => "ut",
            Label::DataValue => "vd",
        }
    }

    /// On-wire key for the CBOR encoding (RFC 8428 integer mapping)
    pub fn cbor_key(&self) -> i64 {
        match self {
            Label::BaseVersion => -1,
            Label::BaseName => -2,
            Label::BaseTime => -3,
            Label::BaseUnit => -4,
            Label::BaseValue => -5,
            Label::BaseSum => -6,
            Label::Name => 0,
            Label::Unit => 1,
            Label::Value => 2,
            Label::StringValue => 3,
            Label::BooleanValue => 4,
            Label::Sum => 5,
            Label::Time => 6,
            Label::UpdateTime => 7,
            Label::DataValue => 8,
        }
    }

    /// On-wire key for the given encoding
    pub fn wire_key(&self, encoding: Encoding) -> FieldKey {
        match encoding {
            Encoding::Json => FieldKey::Text(self.json_key().to_string()),
            Encoding::Cbor => FieldKey::Int(self.cbor_key()),
        }
    }

    /// Reverse lookup from a JSON object key
    pub fn from_json_key(key: &str) -> Option<Label> {
        Label::ALL.iter().copied().find(|l| l.json_key() == key)
    }

    /// Reverse lookup from a CBOR map key
    pub fn from_cbor_key(key: i64) -> Option<Label> {
        Label::ALL.iter().copied().find(|l| l.cbor_key() == key)
    }

    /// Reverse lookup from a stored field key under the given encoding
    ///
    /// Returns `None` for keys outside the vocabulary and for key shapes the
    /// encoding does not use (e.g. a text key under CBOR).
    pub fn from_wire_key(key: &FieldKey, encoding: Encoding) -> Option<Label> {
        match (encoding, key) {
            (Encoding::Json, FieldKey::Text(name)) => Self::from_json_key(name),
            (Encoding::Cbor, FieldKey::Int(num)) => Self::from_cbor_key(*num),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
