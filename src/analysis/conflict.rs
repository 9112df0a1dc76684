//! Conflict detector
//!
//! Two spellings of one base step contradict each other unless the
//! coexistence is sanctioned: the 4/4#/5/5b tritone family, or a fixed
//! idiomatic pattern (blues thirds, octatonic, Ionian 2#, mode plus added
//! natural).

use super::patterns::match_special_pattern;
use crate::models::{Accidental, Degree, PitchClassSet};

const TRITONE_FAMILY: [Degree; 4] = [
    Degree::new(4, Accidental::Natural),
    Degree::new(4, Accidental::Sharp),
    Degree::new(5, Accidental::Natural),
    Degree::new(5, Accidental::Flat),
];

/// True when the selection spells some base step in two irreconcilable ways
pub fn has_conflict(degrees: &[Degree]) -> bool {
    let mut spellings: Vec<Degree> = degrees.to_vec();
    spellings.sort();
    spellings.dedup();

    let duplicated = duplicated_steps(&spellings);
    if duplicated.is_empty() {
        return false;
    }

    let tritone_only = spellings
        .iter()
        .filter(|d| duplicated.contains(&d.step()))
        .all(|d| TRITONE_FAMILY.contains(d));
    if tritone_only {
        return false;
    }

    let normalized = PitchClassSet::from_degrees(&spellings);
    if let Some(pattern) = match_special_pattern(normalized) {
        log::debug!("duplicate steps {:?} sanctioned by {}", duplicated, pattern);
        return false;
    }

    log::debug!("conflicting spellings on steps {:?}", duplicated);
    true
}

/// Base steps carrying more than one distinct spelling
pub fn duplicated_steps(degrees: &[Degree]) -> Vec<u8> {
    let mut counts = [0u8; 8];
    let mut seen: Vec<Degree> = Vec::new();
    for degree in degrees {
        if !seen.contains(degree) {
            seen.push(*degree);
            counts[degree.step().min(7) as usize] += 1;
        }
    }
    (1..=7u8).filter(|&step| counts[step as usize] > 1).collect()
}
