//! Scale catalog lookup

use crate::models::mode::SCALE_CATALOG;
use crate::models::{Degree, PitchClassSet};

/// Catalog scales holding every selected pitch, in catalog order
pub fn scales_containing(degrees: &[Degree]) -> Vec<&'static str> {
    let selected = PitchClassSet::from_degrees(degrees);
    if selected.is_empty() {
        return Vec::new();
    }
    SCALE_CATALOG
        .iter()
        .filter(|scale| selected.is_subset(scale.pitch_classes()))
        .map(|scale| scale.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(tokens: &[&str]) -> Vec<Degree> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_empty_selection() {
        assert!(scales_containing(&[]).is_empty());
    }

    #[test]
    fn test_minor_third_and_flat_seven() {
        let names = scales_containing(&degrees(&["1", "3b", "7b"]));
        assert_eq!(
            names,
            vec!["Dorian", "Phrygian", "Aeolian", "Locrian", "Mixolydian Altered", "Altered Dominant", "Minor Altered"]
        );
    }

    #[test]
    fn test_catalog_phrygian_has_no_flat_two() {
        let names = scales_containing(&degrees(&["1", "2b"]));
        assert_eq!(names, vec!["Locrian", "Mixolydian Altered", "Altered Dominant", "No third"]);
    }

    #[test]
    fn test_spelling_is_irrelevant() {
        assert_eq!(
            scales_containing(&degrees(&["1", "4#"])),
            scales_containing(&degrees(&["1", "5b"]))
        );
    }
}
