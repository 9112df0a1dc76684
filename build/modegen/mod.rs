/// Mode table specification and generation module
///
/// This module defines the canonical ModeTableSpec structures and validation
/// logic for the mode inference tables. It's used by build.rs to:
/// 1. Parse and validate modes.yaml
/// 2. Emit mode_tables.rs (static Rust tables) into OUT_DIR
///
/// The data flow is:
/// 1. modes.yaml (human-editable specification)
/// 2. modegen (validate & emit mode_tables.rs)
/// 3. src/models/mode.rs (include! the generated tables)

pub mod emitter;
pub mod parser;

use std::collections::HashSet;

/// Base semitone for each step 1-7
const STEP_SEMITONES: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// The complete mode table specification
#[derive(Debug, Clone)]
pub struct ModeTableSpec {
    pub modes: Vec<ModeSpec>,
    pub special_patterns: Vec<PatternSpec>,
    pub catalog: Vec<CatalogEntry>,
}

/// Which family a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Greek,
    Interval,
}

impl TemplateKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "greek" => Some(TemplateKind::Greek),
            "interval" => Some(TemplateKind::Interval),
            _ => None,
        }
    }

    /// Variant name of the runtime `ModeCategory` enum
    pub fn rust_variant(&self) -> &'static str {
        match self {
            TemplateKind::Greek => "Greek",
            TemplateKind::Interval => "Interval",
        }
    }
}

/// A single mode template (e.g. "Dorian", "Sus4")
#[derive(Debug, Clone)]
pub struct ModeSpec {
    pub name: String,
    pub kind: TemplateKind,

    /// Canonical degree spelling of the template, ascending
    pub pattern: Vec<String>,

    /// Step pattern in semitones (Greek templates only, sums to 12)
    pub intervals: Vec<u8>,

    pub essential: Vec<String>,
    pub omissions: Vec<String>,
    pub alterations: Vec<String>,
}

/// A named idiomatic scale matched by exact pitch-class set
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub name: String,
    pub variants: Vec<Vec<String>>,
}

/// A named scale in the lookup catalog
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub degrees: Vec<String>,
}

/// Parse a degree token into (step, accidental offset)
///
/// Accepts exactly `^[1-7][#b]?$`.
pub fn parse_degree(token: &str) -> Option<(u8, i8)> {
    let mut chars = token.chars();
    let step = chars.next()?.to_digit(10)? as u8;
    if !(1..=7).contains(&step) {
        return None;
    }
    let offset = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some((step, offset))
}

/// Semitone (0-11) of a valid degree token
pub fn degree_semitone(token: &str) -> Option<u8> {
    let (step, offset) = parse_degree(token)?;
    Some((STEP_SEMITONES[(step - 1) as usize] + offset).rem_euclid(12) as u8)
}

/// Validation result with detailed error messages
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, msg: String) {
        self.is_valid = false;
        self.errors.push(msg);
    }

    pub fn add_warning(&mut self, msg: String) {
        self.warnings.push(msg);
    }
}

impl ModeTableSpec {
    /// Validate the ModeTableSpec for consistency
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        let mut seen_modes = HashSet::new();
        for mode in &self.modes {
            if !seen_modes.insert(mode.name.as_str()) {
                result.add_error(format!("Duplicate mode name: '{}'", mode.name));
            }
            self.validate_mode(mode, &mut result);
        }

        if !self.modes.iter().any(|m| m.kind == TemplateKind::Greek) {
            result.add_error("No greek modes declared".to_string());
        }

        let mut seen_patterns = HashSet::new();
        for pattern in &self.special_patterns {
            if !seen_patterns.insert(pattern.name.as_str()) {
                result.add_error(format!("Duplicate special pattern name: '{}'", pattern.name));
            }
            if pattern.variants.is_empty() {
                result.add_error(format!("Special pattern '{}': no variants", pattern.name));
            }
            for (idx, variant) in pattern.variants.iter().enumerate() {
                check_tokens(
                    &format!("Special pattern '{}' variant {}", pattern.name, idx),
                    variant,
                    &mut result,
                );
            }
        }

        let mut seen_scales = HashSet::new();
        for entry in &self.catalog {
            if !seen_scales.insert(entry.name.as_str()) {
                result.add_error(format!("Duplicate catalog scale: '{}'", entry.name));
            }
            check_tokens(&format!("Catalog scale '{}'", entry.name), &entry.degrees, &mut result);
            if !entry.degrees.iter().any(|d| d == "1") {
                result.add_warning(format!("Catalog scale '{}' has no tonic degree", entry.name));
            }
        }

        result
    }

    fn validate_mode(&self, mode: &ModeSpec, result: &mut ValidationResult) {
        let ctx = format!("Mode '{}'", mode.name);
        check_tokens(&format!("{} pattern", ctx), &mode.pattern, result);
        check_tokens(&format!("{} essential", ctx), &mode.essential, result);
        check_tokens(&format!("{} omissions", ctx), &mode.omissions, result);
        check_tokens(&format!("{} alterations", ctx), &mode.alterations, result);

        for degree in mode.essential.iter().chain(&mode.omissions) {
            if !mode.pattern.contains(degree) {
                result.add_error(format!("{}: '{}' is not part of the pattern", ctx, degree));
            }
        }

        let pattern_semitones: HashSet<u8> =
            mode.pattern.iter().filter_map(|d| degree_semitone(d)).collect();
        for degree in &mode.alterations {
            if let Some(semitone) = degree_semitone(degree) {
                if pattern_semitones.contains(&semitone) {
                    result.add_error(format!(
                        "{}: alteration '{}' duplicates a pattern pitch class",
                        ctx, degree
                    ));
                }
            }
        }

        match mode.kind {
            TemplateKind::Greek => {
                if mode.pattern.len() != 7 {
                    result.add_error(format!("{}: greek pattern must have 7 degrees", ctx));
                }
                if mode.intervals.len() != 7 {
                    result.add_error(format!("{}: greek intervals must have 7 entries", ctx));
                }
                let sum: u32 = mode.intervals.iter().map(|&i| i as u32).sum();
                if sum != 12 {
                    result.add_error(format!("{}: intervals sum to {} (expected 12)", ctx, sum));
                }
                let derived = cyclic_intervals(&mode.pattern);
                if derived.len() == mode.intervals.len() && derived != mode.intervals {
                    result.add_error(format!(
                        "{}: intervals {:?} do not match pattern steps {:?}",
                        ctx, mode.intervals, derived
                    ));
                }
            }
            TemplateKind::Interval => {
                if !mode.intervals.is_empty() {
                    result.add_warning(format!("{}: intervals ignored for interval templates", ctx));
                }
                if mode.pattern.len() > 3 {
                    result.add_error(format!("{}: interval templates hold at most 3 degrees", ctx));
                }
            }
        }
    }
}

fn check_tokens(ctx: &str, tokens: &[String], result: &mut ValidationResult) {
    for token in tokens {
        if parse_degree(token).is_none() {
            result.add_error(format!("{}: invalid degree token '{}'", ctx, token));
        }
    }
}

/// Consecutive semitone steps around the cycle of an ascending pattern
fn cyclic_intervals(pattern: &[String]) -> Vec<u8> {
    let semitones: Vec<u8> = pattern.iter().filter_map(|d| degree_semitone(d)).collect();
    let n = semitones.len();
    (0..n)
        .map(|i| {
            let step = (semitones[(i + 1) % n] + 12 - semitones[i]) % 12;
            if step == 0 { 12 } else { step }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn ionian() -> ModeSpec {
        ModeSpec {
            name: "Ionian".to_string(),
            kind: TemplateKind::Greek,
            pattern: strings(&["1", "2", "3", "4", "5", "6", "7"]),
            intervals: vec![2, 2, 1, 2, 2, 2, 1],
            essential: strings(&["1", "3"]),
            omissions: strings(&["2", "4", "5", "6", "7"]),
            alterations: strings(&["2#", "4#", "5#"]),
        }
    }

    fn spec_with(modes: Vec<ModeSpec>) -> ModeTableSpec {
        ModeTableSpec {
            modes,
            special_patterns: Vec::new(),
            catalog: Vec::new(),
        }
    }

    #[test]
    fn test_validation_success() {
        let result = spec_with(vec![ionian()]).validate();
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_bad_intervals_rejected() {
        let mut mode = ionian();
        mode.intervals = vec![2, 1, 2, 2, 2, 2, 1];
        let result = spec_with(vec![mode]).validate();
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("do not match"));
    }

    #[test]
    fn test_alteration_overlapping_pattern_rejected() {
        let mut mode = ionian();
        mode.alterations.push("3#".to_string());
        let result = spec_with(vec![mode]).validate();
        assert!(!result.is_valid);
    }

    #[test]
    fn test_parse_degree_tokens() {
        assert_eq!(parse_degree("4#"), Some((4, 1)));
        assert_eq!(parse_degree("7b"), Some((7, -1)));
        assert_eq!(parse_degree("8"), None);
        assert_eq!(parse_degree("5bb"), None);
        assert_eq!(degree_semitone("1b"), Some(11));
    }
}
