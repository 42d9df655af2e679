//! Schema model for compiled protobuf descriptors
//!
//! An immutable, in-memory view of one or more compiled descriptor files:
//! message types with their fields, and service types with their methods.
//! Built once by the parser and passed by reference to every resolution and
//! synthesis call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field type kinds the synthesizer knows how to produce values for
///
/// Descriptor kinds outside this set (groups, zigzag and signed fixed-width
/// encodings) map to `Unsupported` and synthesize as null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Fixed32,
    Fixed64,
    Bool,
    String,
    Bytes,
    Enum,
    Message,
    Unsupported,
}

/// A single field of a message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, unique within its owning message
    pub name: String,

    /// Declared type kind
    pub kind: FieldKind,

    /// Whether the field holds zero or more values
    pub repeated: bool,

    /// Qualified name of the referenced message type, set when `kind` is
    /// `Message` (e.g. ".storage.Bucket")
    pub type_name: Option<String>,
}

/// A message type with its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Simple (unqualified) name, e.g. "Bucket"
    pub name: String,

    /// Package-qualified name, e.g. "storage.Bucket"; nested types carry
    /// their enclosing message path, e.g. "storage.Bucket.Lifecycle"
    pub qualified_name: String,

    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

/// An RPC method with its declared input and output type names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name, unique within its owning service
    pub name: String,

    /// Qualified name of the request message type
    pub input_type: String,

    /// Qualified name of the response message type
    pub output_type: String,
}

/// A service with its methods in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub methods: Vec<MethodDescriptor>,
}

/// The full set of message and service descriptors loaded from a compiled
/// descriptor set
///
/// Messages are kept in file-then-declaration order. A bare-name lookup
/// index is built once at construction; when two messages in different
/// files share a simple name, the first one encountered wins. The schema is
/// immutable after construction.
#[derive(Debug, Clone)]
pub struct Schema {
    messages: Vec<MessageDescriptor>,
    services: Vec<ServiceDescriptor>,
    by_simple_name: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema from descriptors in file-then-declaration order
    pub fn new(messages: Vec<MessageDescriptor>, services: Vec<ServiceDescriptor>) -> Self {
        let mut by_simple_name = HashMap::with_capacity(messages.len());
        for (index, message) in messages.iter().enumerate() {
            // First match wins on bare-name collisions across files
            by_simple_name.entry(message.name.clone()).or_insert(index);
        }

        Self {
            messages,
            services,
            by_simple_name,
        }
    }

    /// Resolve a message type name to its descriptor
    ///
    /// Accepts either a bare name ("Bucket") or a qualified reference
    /// (".storage.Bucket"); qualification prefixes are stripped to the
    /// final segment before matching, since descriptor type references are
    /// fully qualified while definitions are indexed under their bare
    /// name. Returns `None` when no message with that simple name exists
    /// anywhere in the loaded set — callers treat this as "no fields,
    /// empty example", never as a failure.
    pub fn resolve_message(&self, type_name: &str) -> Option<&MessageDescriptor> {
        let simple_name = type_name.rsplit('.').next().unwrap_or(type_name);
        self.by_simple_name
            .get(simple_name)
            .map(|&index| &self.messages[index])
    }

    /// All loaded message types in file-then-declaration order
    pub fn messages(&self) -> &[MessageDescriptor] {
        &self.messages
    }

    /// All loaded services in file-then-declaration order
    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.services
    }
}
