//! Build script: generate the static mode tables from modes.yaml
//!
//! modes.yaml is parsed and validated by build/modegen; the result is written
//! to OUT_DIR/mode_tables.rs and included by src/models/mode.rs.

#[path = "build/modegen/mod.rs"]
mod modegen;

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=modes.yaml");
    println!("cargo:rerun-if-changed=build/modegen");

    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|e| panic!("CARGO_MANIFEST_DIR not set: {}", e)),
    );
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {}", e)));

    let spec = modegen::parser::parse_modes_yaml(&manifest_dir.join("modes.yaml"))
        .unwrap_or_else(|e| panic!("{}", e));

    let validation = spec.validate();
    for warning in &validation.warnings {
        println!("cargo:warning=modes.yaml: {}", warning);
    }
    if !validation.is_valid {
        panic!("modes.yaml failed validation:\n  {}", validation.errors.join("\n  "));
    }

    modegen::emitter::emit_mode_tables(&spec, &out_dir.join("mode_tables.rs"))
        .unwrap_or_else(|e| panic!("{}", e));
}
