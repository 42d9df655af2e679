//! External protoc invocation

use grpc_mock_generator_common::{GeneratorError, Result};
use std::path::Path;
use std::process::Command;

/// Compile a `.proto` source file into a binary FileDescriptorSet
///
/// Runs `protoc --descriptor_set_out=<out> --include_imports <proto>`, so
/// the resulting set also carries every transitively imported file. Any
/// failure to run the compiler (binary not installed, invalid schema
/// syntax, missing imports) surfaces as `GeneratorError::Compilation` with
/// protoc's stderr attached; there is no partial result to recover.
pub fn compile_proto<P: AsRef<Path>, Q: AsRef<Path>>(proto_path: P, descriptor_path: Q) -> Result<()> {
    let output = Command::new("protoc")
        .arg(format!(
            "--descriptor_set_out={}",
            descriptor_path.as_ref().display()
        ))
        .arg("--include_imports")
        .arg(proto_path.as_ref())
        .output()
        .map_err(|e| GeneratorError::Compilation(format!("Failed to run protoc: {}", e)))?;

    if !output.status.success() {
        return Err(GeneratorError::Compilation(format!(
            "protoc failed for {}: {}",
            proto_path.as_ref().display(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}
