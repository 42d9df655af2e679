//! Common types and utilities for grpc-mock-generator
//!
//! This crate contains the shared schema model, the example value type, and
//! error types used across the parser, generator, and CLI components.

mod schema;
mod value;

pub use schema::{
    FieldDescriptor, FieldKind, MessageDescriptor, MethodDescriptor, Schema, ServiceDescriptor,
};
pub use value::ExampleValue;

use thiserror::Error;

/// Errors that can occur during mock data generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Compilation error: {0}")]
    Compilation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
