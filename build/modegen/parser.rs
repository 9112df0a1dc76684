/// modes.yaml parser for ModeTableSpec generation
///
/// Parses the modes.yaml file to extract mode templates, special patterns and
/// the scale catalog, producing a ModeTableSpec that can be validated and
/// emitted.

use super::{CatalogEntry, ModeSpec, ModeTableSpec, PatternSpec, TemplateKind};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Parse modes.yaml file and return a ModeTableSpec
pub fn parse_modes_yaml(path: &Path) -> Result<ModeTableSpec, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read modes.yaml: {}", e))?;
    parse_modes_str(&content)
}

/// Parse modes.yaml content
pub fn parse_modes_str(content: &str) -> Result<ModeTableSpec, String> {
    let root: Value = serde_yaml::from_str(content)
        .map_err(|e| format!("Failed to parse modes.yaml as YAML: {}", e))?;

    Ok(ModeTableSpec {
        modes: extract_modes(&root)?,
        special_patterns: extract_special_patterns(&root)?,
        catalog: extract_catalog(&root)?,
    })
}

fn extract_modes(root: &Value) -> Result<Vec<ModeSpec>, String> {
    let modes_seq = root
        .get("modes")
        .ok_or_else(|| "modes not found in modes.yaml".to_string())?
        .as_sequence()
        .ok_or_else(|| "modes must be a sequence".to_string())?;

    let mut modes = Vec::new();

    for (idx, mode_value) in modes_seq.iter().enumerate() {
        let name = mode_value
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("Mode {}: name not found", idx))?
            .to_string();

        let category = mode_value
            .get("category")
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("Mode '{}': category not found", name))?;
        let kind = TemplateKind::from_name(category)
            .ok_or_else(|| format!("Mode '{}': unknown category '{}'", name, category))?;

        let intervals = match mode_value.get("intervals") {
            None => Vec::new(),
            Some(value) => value
                .as_sequence()
                .ok_or_else(|| format!("Mode '{}': intervals must be a sequence", name))?
                .iter()
                .map(|v| {
                    v.as_u64()
                        .filter(|&n| n <= 12)
                        .map(|n| n as u8)
                        .ok_or_else(|| format!("Mode '{}': interval {:?} is not 0-12", name, v))
                })
                .collect::<Result<Vec<_>, String>>()?,
        };

        modes.push(ModeSpec {
            pattern: string_list(mode_value, "pattern", &name)?,
            essential: string_list(mode_value, "essential", &name)?,
            omissions: string_list(mode_value, "omissions", &name)?,
            alterations: string_list(mode_value, "alterations", &name)?,
            name,
            kind,
            intervals,
        });
    }

    Ok(modes)
}

fn extract_special_patterns(root: &Value) -> Result<Vec<PatternSpec>, String> {
    let Some(patterns_value) = root.get("special_patterns") else {
        return Ok(Vec::new());
    };
    let patterns_seq = patterns_value
        .as_sequence()
        .ok_or_else(|| "special_patterns must be a sequence".to_string())?;

    patterns_seq
        .iter()
        .enumerate()
        .map(|(idx, pattern_value)| {
            let name = pattern_value
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| format!("Special pattern {}: name not found", idx))?
                .to_string();

            let variants = pattern_value
                .get("variants")
                .and_then(|v| v.as_sequence())
                .ok_or_else(|| format!("Special pattern '{}': variants not found", name))?
                .iter()
                .map(|variant| token_sequence(variant, &name))
                .collect::<Result<Vec<_>, String>>()?;

            Ok(PatternSpec { name, variants })
        })
        .collect()
}

fn extract_catalog(root: &Value) -> Result<Vec<CatalogEntry>, String> {
    let Some(catalog_value) = root.get("catalog") else {
        return Ok(Vec::new());
    };
    let catalog_seq = catalog_value
        .as_sequence()
        .ok_or_else(|| "catalog must be a sequence".to_string())?;

    catalog_seq
        .iter()
        .enumerate()
        .map(|(idx, entry_value)| {
            let name = entry_value
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| format!("Catalog entry {}: name not found", idx))?
                .to_string();
            let degrees = string_list(entry_value, "degrees", &name)?;
            Ok(CatalogEntry { name, degrees })
        })
        .collect()
}

/// Read a required list of degree tokens from a mapping
fn string_list(value: &Value, key: &str, owner: &str) -> Result<Vec<String>, String> {
    let list = value
        .get(key)
        .ok_or_else(|| format!("'{}': {} not found", owner, key))?;
    token_sequence(list, owner)
}

fn token_sequence(value: &Value, owner: &str) -> Result<Vec<String>, String> {
    value
        .as_sequence()
        .ok_or_else(|| format!("'{}': expected a sequence of degrees", owner))?
        .iter()
        .map(|v| match v {
            Value::String(s) => Ok(s.clone()),
            // Unquoted naturals come through as numbers
            Value::Number(n) => Ok(n.to_string()),
            other => Err(format!("'{}': degree {:?} is not a string", owner, other)),
        })
        .collect()
}
