//! Recursive example value synthesis
//!
//! Value rules per field kind:
//!
//! | Kind | Example value |
//! |---|---|
//! | double, float | random float in [0, 100) |
//! | int32/64, uint32/64, fixed32/64 | random integer in [0, 100] |
//! | bool | random true/false |
//! | string | 10 random alphanumeric characters |
//! | bytes | 10 random bytes |
//! | enum | random integer in [0, 100], no symbol resolution |
//! | message | recurse into the referenced type; empty object if unresolvable |
//! | anything else | null |

use crate::{MethodExample, MockData};
use grpc_mock_generator_common::{
    ExampleValue, FieldDescriptor, FieldKind, MessageDescriptor, Schema,
};
use indexmap::IndexMap;
use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

/// Build one request/response example pair per RPC method in the schema
///
/// Method input and output type names are resolved against the whole
/// loaded set; a name that resolves to nothing yields an empty object
/// rather than an error. When two services declare a method with the same
/// name, the later one overwrites the earlier entry.
pub fn build_mock_data<R: Rng>(schema: &Schema, rng: &mut R) -> MockData {
    let mut mock_data = MockData::new();

    for service in schema.services() {
        for method in &service.methods {
            let request = synthesize_type(schema, rng, &method.input_type);
            let response = synthesize_type(schema, rng, &method.output_type);

            mock_data.insert(method.name.clone(), MethodExample { request, response });
        }
    }

    mock_data
}

/// Resolve a (possibly qualified) type name and synthesize an example for it
fn synthesize_type<R: Rng>(schema: &Schema, rng: &mut R, type_name: &str) -> ExampleValue {
    match schema.resolve_message(type_name) {
        Some(message) => synthesize_message(schema, rng, message),
        None => ExampleValue::empty_message(),
    }
}

/// Synthesize an example object for a message type
///
/// One entry per field, in declaration order. Singular message fields
/// recurse into the referenced type with no depth limit, so a message that
/// reaches itself through a chain of singular fields will recurse without
/// bound. Self-referential *repeated* fields are safe: repeated message
/// fields always synthesize as an empty list.
pub fn synthesize_message<R: Rng>(
    schema: &Schema,
    rng: &mut R,
    message: &MessageDescriptor,
) -> ExampleValue {
    let mut example = IndexMap::with_capacity(message.fields.len());

    for field in &message.fields {
        example.insert(field.name.clone(), synthesize_field(schema, rng, field));
    }

    ExampleValue::Message(example)
}

fn synthesize_field<R: Rng>(schema: &Schema, rng: &mut R, field: &FieldDescriptor) -> ExampleValue {
    if field.repeated {
        // Message elements stay empty to cut off self-referential "children"
        // lists; scalar elements get exactly one example entry.
        if field.kind == FieldKind::Message {
            ExampleValue::List(Vec::new())
        } else {
            ExampleValue::List(vec![synthesize_scalar(schema, rng, field)])
        }
    } else {
        synthesize_scalar(schema, rng, field)
    }
}

fn synthesize_scalar<R: Rng>(schema: &Schema, rng: &mut R, field: &FieldDescriptor) -> ExampleValue {
    match field.kind {
        FieldKind::Double | FieldKind::Float => ExampleValue::Float(rng.gen_range(0.0..100.0)),
        FieldKind::Int32
        | FieldKind::Int64
        | FieldKind::Uint32
        | FieldKind::Uint64
        | FieldKind::Fixed32
        | FieldKind::Fixed64 => ExampleValue::Integer(rng.gen_range(0..=100)),
        FieldKind::Bool => ExampleValue::Bool(rng.gen()),
        FieldKind::String => ExampleValue::Text(Alphanumeric.sample_string(rng, 10)),
        FieldKind::Bytes => ExampleValue::Bytes((0..10).map(|_| rng.gen()).collect()),
        // Enum values stay numeric; symbol names are not resolved
        FieldKind::Enum => ExampleValue::Integer(rng.gen_range(0..=100)),
        FieldKind::Message => match field.type_name.as_deref() {
            Some(type_name) => synthesize_type(schema, rng, type_name),
            None => ExampleValue::empty_message(),
        },
        FieldKind::Unsupported => ExampleValue::Null,
    }
}
