//! FileDescriptorSet decoding

use grpc_mock_generator_common::{GeneratorError, Result, Schema};
use prost::Message;
use prost_types::FileDescriptorSet;
use std::fs;
use std::path::Path;

/// Protobuf schema parser
///
/// Holds a decoded FileDescriptorSet (compiled .proto files) and converts
/// it into the `Schema` model: message types with fields, and services
/// with methods.
pub struct SchemaParser {
    descriptor_set: FileDescriptorSet,
}

impl SchemaParser {
    /// Compile a `.proto` source file and load the resulting descriptor set
    ///
    /// The descriptor set is written to a scratch directory that is removed
    /// when compilation and decoding finish.
    ///
    /// # Example
    /// ```rust,ignore
    /// let schema = SchemaParser::from_proto_file("service.proto")?.parse();
    /// ```
    pub fn from_proto_file<P: AsRef<Path>>(proto_path: P) -> Result<Self> {
        let scratch_dir = tempfile::tempdir()?;
        let descriptor_path = scratch_dir.path().join("descriptor.pb");

        super::compiler::compile_proto(proto_path.as_ref(), &descriptor_path)?;
        Self::from_file(&descriptor_path)
    }

    /// Load a FileDescriptorSet from a binary file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read FileDescriptorSet file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_descriptor_set_bytes(&bytes)
    }

    /// Decode a FileDescriptorSet from bytes
    ///
    /// Corrupt or truncated input is a fatal `Parse` error; the caller has
    /// nothing to recover from a descriptor set it cannot read.
    pub fn from_descriptor_set_bytes(bytes: &[u8]) -> Result<Self> {
        let descriptor_set = FileDescriptorSet::decode(bytes).map_err(|e| {
            GeneratorError::Parse(format!("Failed to decode FileDescriptorSet: {}", e))
        })?;

        Ok(Self { descriptor_set })
    }

    /// Convert the decoded descriptors into the Schema model
    pub fn parse(&self) -> Schema {
        super::converter::convert_descriptor_set(&self.descriptor_set)
    }

    /// Get reference to the underlying descriptor set
    pub fn descriptor_set(&self) -> &FileDescriptorSet {
        &self.descriptor_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_descriptor_set() {
        let descriptor_set = FileDescriptorSet { file: vec![] };
        let bytes = descriptor_set.encode_to_vec();

        let parser = SchemaParser::from_descriptor_set_bytes(&bytes).unwrap();
        let schema = parser.parse();
        assert!(schema.messages().is_empty());
        assert!(schema.services().is_empty());
    }

    #[test]
    fn test_corrupt_bytes_are_parse_error() {
        let result = SchemaParser::from_descriptor_set_bytes(&[0xff, 0xff, 0xff, 0xff]);
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }
}
