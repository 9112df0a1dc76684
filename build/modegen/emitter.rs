/// Rust source emitter for ModeTableSpec
///
/// Converts a validated ModeTableSpec into static Rust tables. The output is
/// included by src/models/mode.rs, so it only names types in scope there:
/// `ModeTemplate`, `ModeCategory`, `SpecialPattern`, `CatalogScale`,
/// `Degree` and `Accidental`.

use super::{parse_degree, ModeTableSpec};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Emit the generated tables to a file
pub fn emit_mode_tables(spec: &ModeTableSpec, path: &Path) -> Result<(), String> {
    let source = emit_mode_tables_string(spec)?;
    fs::write(path, source).map_err(|e| format!("Failed to write mode_tables.rs: {}", e))
}

/// Emit the generated tables as a Rust source string
pub fn emit_mode_tables_string(spec: &ModeTableSpec) -> Result<String, String> {
    let mut out = String::new();
    out.push_str("// @generated by build.rs from modes.yaml. Do not edit.\n\n");

    out.push_str("/// Mode templates in declaration order\n");
    out.push_str("pub static MODE_TEMPLATES: &[ModeTemplate] = &[\n");
    for mode in &spec.modes {
        let intervals = mode
            .intervals
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "    ModeTemplate {{").map_err(fmt_err)?;
        writeln!(out, "        name: {:?},", mode.name).map_err(fmt_err)?;
        writeln!(out, "        category: ModeCategory::{},", mode.kind.rust_variant()).map_err(fmt_err)?;
        writeln!(out, "        pattern: {},", degree_slice(&mode.pattern)?).map_err(fmt_err)?;
        writeln!(out, "        intervals: &[{}],", intervals).map_err(fmt_err)?;
        writeln!(out, "        essential: {},", degree_slice(&mode.essential)?).map_err(fmt_err)?;
        writeln!(out, "        omissions: {},", degree_slice(&mode.omissions)?).map_err(fmt_err)?;
        writeln!(out, "        alterations: {},", degree_slice(&mode.alterations)?).map_err(fmt_err)?;
        writeln!(out, "    }},").map_err(fmt_err)?;
    }
    out.push_str("];\n\n");

    out.push_str("/// Idiomatic scales recognised by exact pitch-class set\n");
    out.push_str("pub static SPECIAL_PATTERNS: &[SpecialPattern] = &[\n");
    for pattern in &spec.special_patterns {
        let variants = pattern
            .variants
            .iter()
            .map(|v| degree_slice(v))
            .collect::<Result<Vec<_>, String>>()?
            .join(", ");
        writeln!(
            out,
            "    SpecialPattern {{ name: {:?}, variants: &[{}] }},",
            pattern.name, variants
        )
        .map_err(fmt_err)?;
    }
    out.push_str("];\n\n");

    out.push_str("/// Named scales for the scale lookup\n");
    out.push_str("pub static SCALE_CATALOG: &[CatalogScale] = &[\n");
    for entry in &spec.catalog {
        writeln!(
            out,
            "    CatalogScale {{ name: {:?}, degrees: {} }},",
            entry.name,
            degree_slice(&entry.degrees)?
        )
        .map_err(fmt_err)?;
    }
    out.push_str("];\n");

    Ok(out)
}

fn degree_slice(tokens: &[String]) -> Result<String, String> {
    let items = tokens
        .iter()
        .map(|t| degree_expr(t))
        .collect::<Result<Vec<_>, String>>()?;
    Ok(format!("&[{}]", items.join(", ")))
}

fn degree_expr(token: &str) -> Result<String, String> {
    let (step, offset) =
        parse_degree(token).ok_or_else(|| format!("Cannot emit invalid degree '{}'", token))?;
    let accidental = match offset {
        -1 => "Flat",
        1 => "Sharp",
        _ => "Natural",
    };
    Ok(format!("Degree::new({}, Accidental::{})", step, accidental))
}

fn fmt_err(e: std::fmt::Error) -> String {
    format!("Failed to format mode tables: {}", e)
}
