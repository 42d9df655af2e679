//! Example value tree produced by the synthesizer

use indexmap::IndexMap;
use serde::Serialize;

/// A synthesized, schema-shaped placeholder value
///
/// Serializes untagged, so a value tree renders as plain JSON: `Bytes`
/// becomes an array of numbers, `Message` an object whose keys keep field
/// declaration order. Trees are built fresh per method and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExampleValue {
    /// Placeholder for field kinds with no example rule
    Null,
    Bool(bool),
    Integer(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Repeated field contents
    List(Vec<ExampleValue>),
    /// Message field contents, keyed by field name in declaration order
    Message(IndexMap<String, ExampleValue>),
}

impl ExampleValue {
    /// An empty message mapping, used wherever a type name fails to resolve
    pub fn empty_message() -> Self {
        ExampleValue::Message(IndexMap::new())
    }
}
