//! Building records from ordered label/value pairs

use crate::error::Result;
use crate::label::{Encoding, Label};
use crate::record::{Leaf, Record};
use crate::value::{Pair, Value};

/// Build a record from pairs, writing fields in the order given
///
/// Infallible: every pair was type-checked at construction, so the write
/// dispatch is a plain exhaustive match.
pub(crate) fn build_record<I>(pairs: I, encoding: Encoding) -> Record
where
    I: IntoIterator<Item = Pair>,
{
    let mut record = Record::new();

    for pair in pairs {
        let key = pair.label().wire_key(encoding);
        let leaf = match pair.into_value() {
            Value::String(s) => Leaf::Text(s),
            Value::Double(v) => Leaf::Float(v),
            Value::Integer(v) => Leaf::Int(i64::from(v)),
            Value::Boolean(v) => Leaf::Bool(v),
        };
        record.push(key, leaf);
    }

    record
}

/// Fluent collector for label/value pairs
///
/// ```
/// use senml_pack::{Label, RecordBuilder, SenMLPack};
///
/// # fn main() -> senml_pack::Result<()> {
/// let pairs = RecordBuilder::new()
///     .field(Label::BaseName, "urn:dev:sensor1")?
///     .field(Label::Value, 22.5)?
///     .finish();
///
/// let mut pack = SenMLPack::json();
/// pack.add_record(pairs);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RecordBuilder {
    pairs: Vec<Pair>,
}

impl RecordBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; fails with `TypeMismatch` on a wrongly typed value
    pub fn field(mut self, label: Label, value: impl Into<Value>) -> Result<Self> {
        self.pairs.push(Pair::new(label, value)?);
        Ok(self)
    }

    /// Append an already constructed pair
    pub fn pair(mut self, pair: Pair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// The collected pairs, in insertion order
    pub fn finish(self) -> Vec<Pair> {
        self.pairs
    }
}
