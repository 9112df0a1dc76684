//! Fixed idiomatic patterns
//!
//! Exact pitch-class sets that are named before any template scoring: the
//! declared special patterns (blues, octatonic), the Ionian 2# reading of a
//! selection holding both thirds, and a Greek mode with one flatted step
//! doubled by its natural.

use crate::models::mode::{greek_modes, SPECIAL_PATTERNS};
use crate::models::{Accidental, Degree, PitchClassSet};

/// 1 2 3b 3
const IONIAN_SHARP_TWO_CORE: PitchClassSet = PitchClassSet::from_bits(0b0000_0001_1101);

/// Upper Ionian degrees that may accompany the core, with their labels
const IONIAN_UPPER: [(Degree, &str); 4] = [
    (Degree::new(4, Accidental::Natural), "no4"),
    (Degree::new(5, Accidental::Natural), "no5"),
    (Degree::new(6, Accidental::Natural), "no6"),
    (Degree::new(7, Accidental::Natural), "no7"),
];

/// Name of the fixed pattern a normalized pitch-class set matches, if any.
///
/// Checked in order: declared special patterns, Ionian 2#, mode plus added
/// natural.
pub fn match_special_pattern(set: PitchClassSet) -> Option<String> {
    if let Some(pattern) = SPECIAL_PATTERNS.iter().find(|p| p.matches(set)) {
        return Some(pattern.name.to_string());
    }
    if let Some(label) = ionian_sharp_two(set) {
        return Some(label);
    }
    mode_with_added_natural(set)
}

fn ionian_sharp_two(set: PitchClassSet) -> Option<String> {
    if !IONIAN_SHARP_TWO_CORE.is_subset(set) {
        return None;
    }
    let upper: PitchClassSet = IONIAN_UPPER.iter().map(|(d, _)| d.semitone()).collect();
    if !set.difference(IONIAN_SHARP_TWO_CORE).is_subset(upper) {
        return None;
    }

    let mut tokens = vec!["Ionian 2#"];
    tokens.extend(
        IONIAN_UPPER
            .iter()
            .filter(|(degree, _)| !set.contains_degree(degree))
            .map(|(_, label)| *label),
    );
    Some(tokens.join(" "))
}

fn mode_with_added_natural(set: PitchClassSet) -> Option<String> {
    if set.len() != 8 {
        return None;
    }
    for template in greek_modes() {
        let pattern = template.pattern_set();
        if !pattern.is_subset(set) {
            continue;
        }
        let added = template
            .pattern
            .iter()
            .filter(|d| d.accidental() == Accidental::Flat)
            .map(|d| d.to_natural())
            .find(|natural| {
                !pattern.contains_degree(natural) && set.difference(pattern).contains_degree(natural)
            });
        if let Some(natural) = added {
            log::debug!("{} with added natural {}", template.name, natural);
            return Some(format!("{} {}", template.name, natural));
        }
    }
    None
}
