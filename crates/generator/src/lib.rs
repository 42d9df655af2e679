//! Example payload synthesis for grpc-mock-generator
//!
//! Walks a `Schema` and materializes one example request and one example
//! response per RPC method. Values are plausible rather than meaningful:
//! numbers land in small ranges, strings are short and alphanumeric, and
//! nested messages are filled recursively.

mod example;

pub use example::{build_mock_data, synthesize_message};

use grpc_mock_generator_common::{ExampleValue, Schema};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Example request/response pair for one RPC method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodExample {
    pub request: ExampleValue,
    pub response: ExampleValue,
}

/// Mock payloads keyed by method name, in service-then-method declaration
/// order
pub type MockData = IndexMap<String, MethodExample>;

/// Mock data generator
///
/// Owns the schema for the duration of a generation run and produces a
/// fresh `MockData` tree per call. Output varies run to run; use
/// [`MockDataGenerator::with_seed`] for reproducible values.
pub struct MockDataGenerator {
    schema: Schema,
    rng: StdRng,
}

impl MockDataGenerator {
    /// Create a generator with entropy-seeded randomness
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible output
    pub fn with_seed(schema: Schema, seed: u64) -> Self {
        Self {
            schema,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Synthesize one request/response example pair per method
    pub fn generate(&mut self) -> MockData {
        example::build_mock_data(&self.schema, &mut self.rng)
    }

    /// Get reference to the underlying schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
