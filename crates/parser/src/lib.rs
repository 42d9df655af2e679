//! Schema loading for grpc-mock-generator
//!
//! Turns a protobuf schema into the in-memory `Schema` model consumed by
//! the generator, in three stages:
//!
//! 1. **Compile**: invoke `protoc` to produce a binary `FileDescriptorSet`
//!    with transitive imports included
//! 2. **Decode**: parse the descriptor set bytes with prost
//! 3. **Convert**: flatten the descriptors into the `Schema` model
//!
//! ## Example
//! ```rust,ignore
//! use grpc_mock_generator_parser::SchemaParser;
//!
//! let schema = SchemaParser::from_proto_file("service.proto")?.parse();
//! ```

mod compiler;
mod converter;
mod parser;

pub use compiler::compile_proto;
pub use parser::SchemaParser;
