//! Enharmonic normalizer
//!
//! Every spelling collapses to the preferred spelling of its semitone. The
//! tritone matches as `4#`; it is displayed as `5b` when the selection also
//! holds a plain `4`.

use super::codec::degree_to_semitone;
use super::errors::Result;
use crate::models::{Accidental, Degree};

const PLAIN_FOUR: Degree = Degree::new(4, Accidental::Natural);
const SHARP_FOUR: Degree = Degree::new(4, Accidental::Sharp);
const FLAT_FIVE: Degree = Degree::new(5, Accidental::Flat);

/// Canonical spelling of a degree token.
///
/// Accepts everything the codec accepts. The legacy double accidentals
/// `5bb` and `5##` are read as `4` and `6`.
pub fn normalize(token: &str) -> Result<Degree> {
    match token {
        "5bb" => Ok(PLAIN_FOUR),
        "5##" => Ok(Degree::new(6, Accidental::Natural)),
        _ => Ok(Degree::from_semitone(degree_to_semitone(token)?)),
    }
}

/// Canonical spelling of an already parsed degree
pub fn normalize_degree(degree: Degree) -> Degree {
    Degree::from_semitone(degree.semitone())
}

/// Normalize a selection, keeping first-seen order and dropping repeats
pub fn normalize_all(degrees: &[Degree]) -> Vec<Degree> {
    let mut normalized: Vec<Degree> = Vec::with_capacity(degrees.len());
    for degree in degrees.iter().map(|&d| normalize_degree(d)) {
        if !normalized.contains(&degree) {
            normalized.push(degree);
        }
    }
    normalized
}

pub fn is_tritone(degree: &Degree) -> bool {
    degree.semitone() == SHARP_FOUR.semitone()
}

/// Tritone spelling to show to the user
pub fn display_tritone(has_plain_four: bool) -> Degree {
    if has_plain_four {
        FLAT_FIVE
    } else {
        SHARP_FOUR
    }
}

/// True when the selection spells an unaltered 4
pub fn has_plain_four(degrees: &[Degree]) -> bool {
    degrees.contains(&PLAIN_FOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(token: &str) -> String {
        normalize(token).unwrap().to_string()
    }

    #[test]
    fn test_preferred_spellings() {
        assert_eq!(spelled("2#"), "3b");
        assert_eq!(spelled("5b"), "4#");
        assert_eq!(spelled("5#"), "6b");
        assert_eq!(spelled("3#"), "4");
        assert_eq!(spelled("4b"), "3");
        assert_eq!(spelled("7#"), "1");
        assert_eq!(spelled("6#"), "7b");
    }

    #[test]
    fn test_legacy_double_accidentals() {
        assert_eq!(spelled("5bb"), "4");
        assert_eq!(spelled("5##"), "6");
    }

    #[test]
    fn test_idempotent() {
        let tokens = [
            "1", "1b", "1#", "2b", "2", "2#", "3b", "3", "3#", "4b", "4", "4#", "5b", "5", "5#",
            "6b", "6", "6#", "7b", "7", "7#", "5bb", "5##",
        ];
        for token in tokens {
            let once = normalize(token).unwrap();
            let twice = normalize(&once.to_string()).unwrap();
            assert_eq!(once, twice, "{}", token);
        }
    }

    #[test]
    fn test_tritone_display() {
        let with_four: Vec<Degree> = ["1", "4", "5b"].iter().map(|t| t.parse().unwrap()).collect();
        assert!(has_plain_four(&with_four));
        let sharp_three: Vec<Degree> = ["1", "3#", "5b"].iter().map(|t| t.parse().unwrap()).collect();
        assert!(!has_plain_four(&sharp_three));
        assert_eq!(display_tritone(true).to_string(), "5b");
        assert_eq!(display_tritone(false).to_string(), "4#");
    }

    #[test]
    fn test_normalize_all_dedupes() {
        let degrees: Vec<Degree> = ["1", "4#", "5b", "2#"].iter().map(|t| t.parse().unwrap()).collect();
        let normalized: Vec<String> = normalize_all(&degrees).iter().map(|d| d.to_string()).collect();
        assert_eq!(normalized, vec!["1", "4#", "3b"]);
    }
}
