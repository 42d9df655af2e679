//! grpc-mock-generator CLI
//!
//! Compiles a `.proto` schema, synthesizes one mock request/response pair
//! per RPC method, and prints the result as JSON on stdout. Progress lines
//! go to stderr so the output stays pipeable.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use grpc_mock_generator_generator::MockDataGenerator;
use grpc_mock_generator_parser::SchemaParser;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grpc-mock-generator")]
#[command(version, about = "Generate mock request/response payloads for gRPC services", long_about = None)]
struct Cli {
    /// Path to the .proto schema file
    proto: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    eprintln!(
        "{} Compiling schema: {}",
        "→".cyan(),
        cli.proto.display()
    );

    let schema = SchemaParser::from_proto_file(&cli.proto)
        .context("Failed to load schema")?
        .parse();

    eprintln!(
        "{} Loaded {} message types, {} services",
        "✓".green(),
        schema.messages().len(),
        schema.services().len()
    );

    let mock_data = MockDataGenerator::new(schema).generate();

    // 4-space indentation, matching the reference output
    let mut stdout = std::io::stdout().lock();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut stdout, formatter);
    mock_data
        .serialize(&mut serializer)
        .context("Failed to render mock data")?;
    writeln!(stdout)?;

    Ok(())
}
