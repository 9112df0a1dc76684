// Mode matcher, normalizer and conflict detector through the public API

use modal_oracle::analysis::{
    analyze, classify, degree_to_semitone, degrees_to_intervals, has_conflict, normalize, Verdict,
};
use modal_oracle::models::mode::greek_modes;
use modal_oracle::{Degree, ModeError};

fn degrees(tokens: &[&str]) -> Vec<Degree> {
    tokens
        .iter()
        .map(|t| t.parse().expect("test tokens are well formed"))
        .collect()
}

fn label(tokens: &[&str]) -> String {
    analyze(&degrees(tokens))
}

#[test]
fn test_normalize_is_idempotent() {
    for step in 1..=7 {
        for accidental in ["", "b", "#", "bb", "##"] {
            let token = format!("{}{}", step, accidental);
            let once = normalize(&token).unwrap();
            assert_eq!(normalize(&once.to_string()).unwrap(), once, "{}", token);
        }
    }
}

#[test]
fn test_ascending_seven_note_intervals_sum_to_octave() {
    for template in greek_modes() {
        let tokens: Vec<String> = template.pattern.iter().map(|d| d.to_string()).collect();
        let intervals = degrees_to_intervals(&tokens).unwrap();
        assert_eq!(intervals.iter().map(|&i| i as u32).sum::<u32>(), 12, "{}", template.name);
        // Canonical spelling round-trips to the declared step pattern
        assert_eq!(intervals, template.intervals, "{}", template.name);
    }
}

#[test]
fn test_invalid_degree_propagates() {
    assert_eq!(
        degree_to_semitone("9"),
        Err(ModeError::InvalidDegree("9".to_string()))
    );
    assert!("3x".parse::<Degree>().is_err());
}

#[test]
fn test_conflict_detection() {
    assert!(!has_conflict(&degrees(&["1", "3", "5"])));
    assert!(has_conflict(&degrees(&["1", "3", "3b", "5"])));
}

#[test]
fn test_complete_modes() {
    assert_eq!(label(&["1", "2", "3", "4", "5", "6", "7"]), "Ionian");
    assert_eq!(label(&["1", "2", "3b", "4", "5", "6", "7b"]), "Dorian");
    assert_eq!(label(&["1", "2b", "3b", "4", "5b", "6b", "7b"]), "Locrian");
    assert_eq!(label(&["1", "2b", "3b", "4", "4#", "6b", "7b"]), "Locrian");
}

#[test]
fn test_input_order_does_not_matter() {
    assert_eq!(label(&["7b", "5", "1", "3b", "6", "2", "4"]), "Dorian");
}

#[test]
fn test_incomplete_triads() {
    assert!(label(&["1", "3", "5"]).contains("Ionian"));

    let minor = label(&["1", "3b", "5"]);
    assert!(
        ["Aeolian", "Dorian", "Phrygian"].iter().any(|m| minor.contains(m)),
        "unexpected minor label {}",
        minor
    );
}

#[test]
fn test_conflicting_input_label() {
    let result = label(&["1", "3", "3b", "5"]);
    assert!(result.contains("No matching mode found"));
    assert_eq!(result, "No matching mode found - conflicting degrees");
}

#[test]
fn test_blues_and_octatonic() {
    assert_eq!(label(&["1", "3b", "3", "4", "5", "7b"]), "Blues scale");
    assert_eq!(label(&["1", "3b", "3", "5", "7b"]), "Blues scale");
    assert_eq!(label(&["1", "2", "3b", "3", "4#", "5", "6", "7b", "7"]), "Octatonic scale");
}

#[test]
fn test_ionian_sharp_two() {
    assert_eq!(label(&["1", "2", "3b", "3", "5", "6", "7"]), "Ionian 2# no4");
    assert_eq!(label(&["1", "2", "2#", "3", "4", "5", "6", "7"]), "Ionian 2#");
}

#[test]
fn test_mode_with_added_natural() {
    assert_eq!(label(&["1", "2b", "2", "3b", "4", "5", "6b", "7b"]), "Phrygian 2");
    assert_eq!(label(&["1", "2", "3", "4", "5", "6", "7b", "7"]), "Mixolydian 7");
}

#[test]
fn test_tritone_display_follows_plain_four() {
    assert_eq!(label(&["1", "2", "3", "4", "5b", "6", "7"]), "Ionian 5b");
    assert_eq!(label(&["1", "2", "3", "4#", "5", "6", "7b"]), "Mixolydian 4#");
}

#[test]
fn test_interval_sonorities_only_for_small_sets() {
    assert_eq!(label(&["1", "2"]), "Sus2");
    assert_eq!(label(&["1", "4"]), "Sus4");
    assert_eq!(label(&["1", "7"]), "Major 7");
    assert_eq!(label(&["1", "2", "4", "5"]), "No matching mode found");
}

#[test]
fn test_verdict_exposes_template() {
    match classify(&degrees(&["1", "3", "5", "7b"])) {
        Verdict::Mode { template, label } => {
            assert_eq!(template.name, "Mixolydian");
            assert_eq!(label, "Mixolydian no2 no4 no6");
        }
        other => panic!("expected a mode, got {:?}", other),
    }
    assert_eq!(classify(&[]), Verdict::Empty);
}
