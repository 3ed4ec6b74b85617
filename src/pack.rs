//! SenML pack facade over the record store
//!
//! A `SenMLPack` owns the ordered record store and the encoding chosen at
//! construction. Every operation is synchronous and in-memory; the only I/O
//! shaped edges are the decode constructors and the encode methods.

use tracing::trace;

use crate::builder::build_record;
use crate::error::{Result, SenMLError};
use crate::label::{Encoding, Label};
use crate::record::Record;
use crate::value::{Pair, Value};
use crate::{cbor, json};

/// An ordered collection of SenML records bound to one wire encoding
///
/// ```
/// use senml_pack::{Label, SenMLPack};
///
/// # fn main() -> senml_pack::Result<()> {
/// let mut pack = SenMLPack::json();
/// pack.add_record([
///     Label::BaseName.with_value("urn:dev:sensor1")?,
///     Label::Value.with_value(22.5)?,
/// ]);
///
/// assert_eq!(pack.to_bytes()?, br#"[{"bn":"urn:dev:sensor1","v":22.5}]"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SenMLPack {
    encoding: Encoding,
    records: Vec<Record>,
}

impl SenMLPack {
    /// Create an empty pack for the given encoding
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            records: Vec::new(),
        }
    }

    /// Create an empty JSON pack
    pub fn json() -> Self {
        Self::new(Encoding::Json)
    }

    /// Create an empty CBOR pack
    pub fn cbor() -> Self {
        Self::new(Encoding::Cbor)
    }

    /// Decode a whole message into a pack
    ///
    /// Record order is the array order in the buffer. Fails with `Decode`
    /// on malformed input.
    pub fn from_slice(encoding: Encoding, bytes: &[u8]) -> Result<Self> {
        let records = match encoding {
            Encoding::Json => json::decode_pack(bytes)?,
            Encoding::Cbor => cbor::decode_pack(bytes)?,
        };
        trace!(?encoding, count = records.len(), "decoded SenML pack");
        Ok(Self { encoding, records })
    }

    /// Decode a JSON message
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(Encoding::Json, bytes)
    }

    /// Decode a CBOR message
    pub fn from_cbor_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(Encoding::Cbor, bytes)
    }

    /// The encoding this pack was constructed with
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the stored records in order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn record(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or_else(|| SenMLError::index_out_of_range(index, self.records.len()))
    }

    /// Serialized bytes of the record at `index`, re-encoded on its own
    pub fn record_bytes(&self, index: usize) -> Result<Vec<u8>> {
        let record = self.record(index)?;
        match self.encoding {
            Encoding::Json => json::encode_record(record),
            Encoding::Cbor => cbor::encode_record(record),
        }
    }

    /// Serialized bytes of every record, in store order
    pub fn records_bytes(&self) -> Result<Vec<Vec<u8>>> {
        (0..self.records.len())
            .map(|index| self.record_bytes(index))
            .collect()
    }

    /// Labels present in record `index`, in field order
    pub fn labels(&self, index: usize) -> Result<Vec<Label>> {
        Ok(self.record(index)?.labels(self.encoding))
    }

    /// Read the value of `label` in record `index` as its declared type
    ///
    /// The index is resolved before the field lookup, so a bad index fails
    /// with `IndexOutOfRange` rather than `FieldNotPresent`.
    pub fn value(&self, label: Label, index: usize) -> Result<Value> {
        self.record(index)?.value(label, self.encoding)
    }

    /// Decode a single pre-encoded record and append it to the store
    pub fn add_record_slice(&mut self, bytes: &[u8]) -> Result<()> {
        let record = match self.encoding {
            Encoding::Json => json::decode_record(bytes)?,
            Encoding::Cbor => cbor::decode_record(bytes)?,
        };
        trace!(fields = record.len(), "appended pre-encoded record");
        self.records.push(record);
        Ok(())
    }

    /// Build a record from ordered pairs and append it to the store
    ///
    /// Construction and insertion are atomic: there is no way to build a
    /// record through this API without storing it.
    pub fn add_record<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = Pair>,
    {
        self.records.push(build_record(pairs, self.encoding));
    }

    /// Serialize the whole store as an array, `[]`/`0x80` when empty
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self.encoding {
            Encoding::Json => json::encode_pack(&self.records),
            Encoding::Cbor => cbor::encode_pack(&self.records),
        }
    }
}

impl<'a> IntoIterator for &'a SenMLPack {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pack_serialization() {
        assert_eq!(SenMLPack::json().to_bytes().unwrap(), b"[]");
        assert_eq!(SenMLPack::cbor().to_bytes().unwrap(), [0x80]);
    }

    #[test]
    fn test_decode_and_read() {
        let pack = SenMLPack::from_json_slice(
            br#"[{"bn":"mac:urn:dev:3290","v":30.0,"vb":false},{"bn":"hello","ut":0.01,"bt":0.0,"bu":"Watt"}]"#,
        )
        .unwrap();

        assert_eq!(pack.len(), 2);
        assert_eq!(
            pack.value(Label::BaseName, 0).unwrap(),
            Value::String("mac:urn:dev:3290".into())
        );
        assert_eq!(pack.value(Label::Value, 0).unwrap(), Value::Double(30.0));
        assert_eq!(
            pack.value(Label::BooleanValue, 0).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(pack.value(Label::UpdateTime, 1).unwrap(), Value::Double(0.01));
    }

    #[test]
    fn test_index_resolved_before_field_lookup() {
        let pack = SenMLPack::from_json_slice(br#"[{"v":1.0}]"#).unwrap();
        assert_eq!(
            pack.value(Label::BaseName, 5).unwrap_err(),
            SenMLError::index_out_of_range(5, 1)
        );
        assert_eq!(
            pack.value(Label::BaseName, 0).unwrap_err(),
            SenMLError::field_not_present(Label::BaseName)
        );
        assert_eq!(
            pack.labels(3).unwrap_err(),
            SenMLError::index_out_of_range(3, 1)
        );
        assert_eq!(
            pack.record_bytes(1).unwrap_err(),
            SenMLError::index_out_of_range(1, 1)
        );
    }

    #[test]
    fn test_add_record_appends_in_order() {
        let mut pack = SenMLPack::json();
        pack.add_record([
            Label::BaseName.with_value("hello2").unwrap(),
            Label::Value.with_value(20.0).unwrap(),
        ]);
        pack.add_record_slice(br#"{"bn":"hello3","v":35.0,"vb":false}"#)
            .unwrap();

        assert_eq!(pack.len(), 2);
        assert_eq!(
            pack.value(Label::BaseName, 0).unwrap(),
            Value::String("hello2".into())
        );
        assert_eq!(
            pack.value(Label::BaseName, 1).unwrap(),
            Value::String("hello3".into())
        );
        assert_eq!(pack.value(Label::Value, 1).unwrap(), Value::Double(35.0));
    }

    #[test]
    fn test_add_record_slice_rejects_malformed() {
        let mut pack = SenMLPack::json();
        assert!(matches!(
            pack.add_record_slice(b"{broken"),
            Err(SenMLError::Decode { .. })
        ));
        assert!(pack.is_empty());
    }

    #[test]
    fn test_record_bytes_reencodes_each_record() {
        let input: &[u8] =
            br#"[{"bn":"mac:urn:dev:3290","v":30.0,"vb":false},{"bn":"hello","ut":0.01,"bt":0.0,"bu":"Watt"}]"#;
        let pack = SenMLPack::from_json_slice(input).unwrap();

        assert_eq!(
            pack.record_bytes(0).unwrap(),
            br#"{"bn":"mac:urn:dev:3290","v":30.0,"vb":false}"#
        );
        assert_eq!(
            pack.record_bytes(1).unwrap(),
            br#"{"bn":"hello","ut":0.01,"bt":0.0,"bu":"Watt"}"#
        );

        let all = pack.records_bytes().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], pack.record_bytes(0).unwrap());
        assert_eq!(all[1], pack.record_bytes(1).unwrap());
    }

    #[test]
    fn test_iteration() {
        let pack = SenMLPack::from_json_slice(br#"[{"v":1.0},{"v":2.0}]"#).unwrap();
        assert_eq!(pack.iter().count(), 2);
        assert_eq!((&pack).into_iter().count(), 2);
    }
}
