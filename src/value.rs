//! Typed values and label/value pairs
//!
//! `Value` is the closed set of primitive types a SenML field can hold. A
//! `Pair` binds a label to a value of its declared type and is the only way
//! to feed data into the record builder, so a mismatched write is caught
//! before any record exists.

use std::fmt;

use crate::error::{Result, SenMLError};
use crate::label::Label;

/// The declared primitive type of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// UTF-8 text
    String,
    /// 64-bit floating point number
    Double,
    /// 32-bit signed integer
    Integer,
    /// true/false
    Boolean,
}

impl ValueType {
    /// Lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Double => "double",
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete SenML value, one variant per declared type
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Textual value
    String(String),
    /// Numeric value
    Double(f64),
    /// Integer value (the width of `bver` on the wire)
    Integer(i32),
    /// Boolean value
    Boolean(bool),
}

impl Value {
    /// The type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Double(_) => ValueType::Double,
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
        }
    }

    /// Borrow the text content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this is a double value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Double(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
        }
    }
}

/// A label with an attached value, ready to be written into a record
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    label: Label,
    value: Value,
}

impl Pair {
    /// Bind `value` to `label`
    ///
    /// Fails with `TypeMismatch` when the value's variant does not match the
    /// label's declared type, e.g. attaching text to `Label::Value`.
    pub fn new(label: Label, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        if value.value_type() != label.value_type() {
            return Err(SenMLError::type_mismatch(
                label,
                label.value_type(),
                value.value_type().as_str(),
            ));
        }
        Ok(Self { label, value })
    }

    /// The label of this pair
    pub fn label(&self) -> Label {
        self.label
    }

    /// The attached value
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn into_value(self) -> Value {
        self.value
    }
}

impl Label {
    /// Attach a value to this label, producing a [`Pair`]
    ///
    /// ```
    /// use senml_pack::Label;
    ///
    /// let pair = Label::BaseName.with_value("urn:dev:sensor1").unwrap();
    /// assert_eq!(pair.label(), Label::BaseName);
    /// ```
    pub fn with_value(self, value: impl Into<Value>) -> Result<Pair> {
        Pair::new(self, value)
    }
}
