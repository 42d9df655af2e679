//! Converts prost descriptor types to the Schema model

use grpc_mock_generator_common::{
    FieldDescriptor, FieldKind, MessageDescriptor, MethodDescriptor, Schema, ServiceDescriptor,
};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorSet};

/// Flatten a FileDescriptorSet into the Schema model
///
/// Messages are collected in file-then-declaration order, nested
/// declarations included, so bare-name collisions resolve to the first
/// definition the set presents.
pub fn convert_descriptor_set(descriptor_set: &FileDescriptorSet) -> Schema {
    let mut messages = Vec::new();
    let mut services = Vec::new();

    for file in &descriptor_set.file {
        collect_messages(file.package(), &file.message_type, &mut messages);

        for service in &file.service {
            services.push(ServiceDescriptor {
                name: service.name().to_string(),
                methods: service
                    .method
                    .iter()
                    .map(|method| MethodDescriptor {
                        name: method.name().to_string(),
                        input_type: method.input_type().to_string(),
                        output_type: method.output_type().to_string(),
                    })
                    .collect(),
            });
        }
    }

    Schema::new(messages, services)
}

/// Collect message descriptors declared under `prefix`, depth-first
///
/// `prefix` is the package path for top-level messages and the enclosing
/// message's qualified name for nested ones.
fn collect_messages(prefix: &str, descriptors: &[DescriptorProto], out: &mut Vec<MessageDescriptor>) {
    for descriptor in descriptors {
        let qualified_name = if prefix.is_empty() {
            descriptor.name().to_string()
        } else {
            format!("{}.{}", prefix, descriptor.name())
        };

        out.push(MessageDescriptor {
            name: descriptor.name().to_string(),
            qualified_name: qualified_name.clone(),
            fields: descriptor.field.iter().map(convert_field).collect(),
        });

        collect_messages(&qualified_name, &descriptor.nested_type, out);
    }
}

fn convert_field(field: &FieldDescriptorProto) -> FieldDescriptor {
    let kind = convert_field_kind(field.r#type());

    FieldDescriptor {
        name: field.name().to_string(),
        kind,
        repeated: field.label() == Label::Repeated,
        type_name: if kind == FieldKind::Message {
            Some(field.type_name().to_string())
        } else {
            None
        },
    }
}

/// Map a descriptor field type onto the synthesizer's kind set
///
/// Groups and the zigzag/signed fixed-width encodings have no example rule
/// and map to `Unsupported`.
fn convert_field_kind(field_type: Type) -> FieldKind {
    match field_type {
        Type::Double => FieldKind::Double,
        Type::Float => FieldKind::Float,
        Type::Int64 => FieldKind::Int64,
        Type::Uint64 => FieldKind::Uint64,
        Type::Int32 => FieldKind::Int32,
        Type::Fixed64 => FieldKind::Fixed64,
        Type::Fixed32 => FieldKind::Fixed32,
        Type::Bool => FieldKind::Bool,
        Type::String => FieldKind::String,
        Type::Bytes => FieldKind::Bytes,
        Type::Uint32 => FieldKind::Uint32,
        Type::Enum => FieldKind::Enum,
        Type::Message => FieldKind::Message,
        Type::Group | Type::Sint32 | Type::Sint64 | Type::Sfixed32 | Type::Sfixed64 => {
            FieldKind::Unsupported
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

    fn string_field(name: &str) -> FieldDescriptorProto {
        FieldDescriptorProto {
            name: Some(name.to_string()),
            number: Some(1),
            label: Some(Label::Optional as i32),
            r#type: Some(Type::String as i32),
            ..Default::default()
        }
    }

    #[test]
    fn test_convert_field_kind_table() {
        assert_eq!(convert_field_kind(Type::Double), FieldKind::Double);
        assert_eq!(convert_field_kind(Type::Int32), FieldKind::Int32);
        assert_eq!(convert_field_kind(Type::Fixed64), FieldKind::Fixed64);
        assert_eq!(convert_field_kind(Type::Bool), FieldKind::Bool);
        assert_eq!(convert_field_kind(Type::Enum), FieldKind::Enum);
        assert_eq!(convert_field_kind(Type::Message), FieldKind::Message);
        assert_eq!(convert_field_kind(Type::Sint32), FieldKind::Unsupported);
        assert_eq!(convert_field_kind(Type::Sfixed64), FieldKind::Unsupported);
        assert_eq!(convert_field_kind(Type::Group), FieldKind::Unsupported);
    }

    #[test]
    fn test_convert_repeated_message_field() {
        let field = FieldDescriptorProto {
            name: Some("buckets".to_string()),
            number: Some(1),
            label: Some(Label::Repeated as i32),
            r#type: Some(Type::Message as i32),
            type_name: Some(".storage.Bucket".to_string()),
            ..Default::default()
        };

        let converted = convert_field(&field);
        assert!(converted.repeated);
        assert_eq!(converted.kind, FieldKind::Message);
        assert_eq!(converted.type_name.as_deref(), Some(".storage.Bucket"));
    }

    #[test]
    fn test_type_name_only_kept_for_message_fields() {
        let field = FieldDescriptorProto {
            name: Some("state".to_string()),
            number: Some(1),
            label: Some(Label::Optional as i32),
            r#type: Some(Type::Enum as i32),
            type_name: Some(".storage.State".to_string()),
            ..Default::default()
        };

        let converted = convert_field(&field);
        assert_eq!(converted.kind, FieldKind::Enum);
        assert_eq!(converted.type_name, None);
    }

    #[test]
    fn test_nested_messages_are_collected_with_qualified_names() {
        let file = FileDescriptorProto {
            name: Some("storage.proto".to_string()),
            package: Some("storage".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("Bucket".to_string()),
                field: vec![string_field("name")],
                nested_type: vec![DescriptorProto {
                    name: Some("Lifecycle".to_string()),
                    field: vec![string_field("rule")],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let schema = convert_descriptor_set(&FileDescriptorSet { file: vec![file] });

        let names: Vec<&str> = schema
            .messages()
            .iter()
            .map(|m| m.qualified_name.as_str())
            .collect();
        assert_eq!(names, vec!["storage.Bucket", "storage.Bucket.Lifecycle"]);
        assert!(schema.resolve_message("Lifecycle").is_some());
    }

    #[test]
    fn test_services_and_methods_are_collected() {
        let file = FileDescriptorProto {
            name: Some("storage.proto".to_string()),
            package: Some("storage".to_string()),
            service: vec![ServiceDescriptorProto {
                name: Some("Storage".to_string()),
                method: vec![MethodDescriptorProto {
                    name: Some("GetBucket".to_string()),
                    input_type: Some(".storage.GetBucketRequest".to_string()),
                    output_type: Some(".storage.Bucket".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let schema = convert_descriptor_set(&FileDescriptorSet { file: vec![file] });

        assert_eq!(schema.services().len(), 1);
        let service = &schema.services()[0];
        assert_eq!(service.name, "Storage");
        assert_eq!(service.methods.len(), 1);
        assert_eq!(service.methods[0].input_type, ".storage.GetBucketRequest");
        assert_eq!(service.methods[0].output_type, ".storage.Bucket");
    }
}
