// Altered-scale reading, degree alteration and catalog lookup

use modal_oracle::analysis::{analyze_altered_scale, apply_alteration, scales_containing};
use modal_oracle::api::types::AlteredView;
use modal_oracle::{Accidental, Degree, ModeError};

fn degrees(tokens: &[&str]) -> Vec<Degree> {
    tokens
        .iter()
        .map(|t| t.parse().expect("test tokens are well formed"))
        .collect()
}

#[test]
fn test_altering_a_rotation_then_reading_it() {
    // Ionian with its seventh lowered is Mixolydian, no alteration to report
    let ionian = degrees(&["1", "2", "3", "4", "5", "6", "7"]);
    let altered = apply_alteration(&ionian, 7, Accidental::Flat).unwrap();

    let result = analyze_altered_scale(&altered);
    assert_eq!(result.analysis, "Mixolydian");
    assert_eq!(result.intervals, vec![2, 2, 1, 2, 2, 1, 2]);
}

#[test]
fn test_sharpened_fifth_reported_against_matched_mode() {
    let ionian = degrees(&["1", "2", "3", "4", "5", "6", "7"]);
    let altered = apply_alteration(&ionian, 5, Accidental::Sharp).unwrap();

    let view = AlteredView::from(analyze_altered_scale(&altered));
    assert_eq!(view.analysis, "Altered Ionian + 5#");
    assert_eq!(view.intervals, "2 2 1 3 1 2 1");
}

#[test]
fn test_doubly_altered_scale_uses_matcher() {
    // C D# E F G# A# Bb: both sixth and seventh land on Bb
    let result = analyze_altered_scale(&degrees(&["1", "2#", "3", "4", "5#", "6#", "7b"]));
    assert_eq!(result.analysis, "Altered Mixolydian + 2# 5# 6#");
    assert_eq!(result.intervals, vec![3, 1, 1, 3, 2, 12, 2]);
}

#[test]
fn test_alteration_errors() {
    let triad = degrees(&["1", "3", "5"]);
    assert_eq!(
        apply_alteration(&triad, 6, Accidental::Flat),
        Err(ModeError::StepNotFound(6))
    );

    let both_thirds = degrees(&["1", "3b", "3", "5"]);
    let err = apply_alteration(&both_thirds, 3, Accidental::Sharp).unwrap_err();
    assert!(matches!(err, ModeError::AlterationConflict { .. }));
    assert_eq!(err.to_string(), "Cannot alter to 3#: step already spelled as 3");
}

#[test]
fn test_catalog_lookup() {
    let names = scales_containing(&degrees(&["1", "3", "4#"]));
    assert_eq!(names, vec!["Lydian", "Mixolydian Altered", "Altered Dominant", "Major Altered"]);
    assert!(scales_containing(&[]).is_empty());
}
