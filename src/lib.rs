//! # senml-pack - Label-indexed SenML for Rust
//!
//! Typed, format-agnostic access to [RFC 8428](https://tools.ietf.org/html/rfc8428)
//! Sensor Measurement Lists. A pack decodes a JSON or CBOR buffer into an
//! ordered sequence of flat records, lets callers read values out of a record
//! by label, build new records from label/value pairs, and re-serialize to the
//! same wire format.
//!
//! ## Features
//!
//! - **One label vocabulary, two wire keys**: every label maps to a short
//!   string in JSON (`"bn"`) and a small integer in CBOR (`-2`); the encoding
//!   is picked once, at pack construction
//! - **Typed reads**: each label declares its primitive type; a read either
//!   returns that type or fails with a `TypeMismatch`, never a coercion
//! - **Order-preserving**: field order survives decode/encode round trips
//! - **Closed value set**: string, double, integer and boolean values, checked
//!   when a pair is built rather than when a record is written
//!
//! ## Quick Start
//!
//! ```rust
//! use senml_pack::{Label, SenMLPack, Value, Result};
//!
//! fn example() -> Result<()> {
//!     // Build a pack and read it back
//!     let mut pack = SenMLPack::json();
//!     pack.add_record([
//!         Label::BaseName.with_value("urn:dev:sensor1")?,
//!         Label::Value.with_value(22.5)?,
//!         Label::Unit.with_value("Cel")?,
//!     ]);
//!
//!     let bytes = pack.to_bytes()?;
//!     let decoded = SenMLPack::from_json_slice(&bytes)?;
//!     assert_eq!(decoded.value(Label::Value, 0)?, Value::Double(22.5));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Data Model
//!
//! A SenML message is an array of records. Each record is a flat mapping from
//! on-wire key to primitive leaf; keys come from the closed [`Label`]
//! vocabulary (base fields `bn`/`bt`/`bu`/`bv`/`bs`/`bver`, record fields
//! `n`/`u`/`v`/`vs`/`vb`/`vd`/`s`/`t`/`ut`). Resolving base values across
//! records is out of scope here: the pack is a faithful, typed view of the
//! wire data.

pub mod builder;
pub mod cbor;
pub mod error;
pub mod json;
pub mod label;
pub mod pack;
pub mod record;
pub mod value;

// Re-export main types
pub use builder::RecordBuilder;
pub use error::{Result, SenMLError};
pub use label::{Encoding, Label};
pub use pack::SenMLPack;
pub use record::{FieldKey, Leaf, Record};
pub use value::{Pair, Value, ValueType};
