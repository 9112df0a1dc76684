//! Rotation enumerator
//!
//! Treats every member of a selection as a tonic in turn and reads the mode
//! of each rotation.

use super::codec::cyclic_intervals;
use super::matcher::analyze;
use crate::models::mode::greek_modes;
use crate::models::{AnalysisResult, Degree, PitchClassSet};

/// 1 2 3 4 5 6 7
const MAJOR_SCALE: PitchClassSet = PitchClassSet::from_bits(0b1010_1011_0101);

/// Analyse every rotation of a selection.
///
/// The selection's degree labels are relative to an arbitrary reference
/// tonic. Repeated pitch classes collapse. Results come back in rotation
/// order, one per distinct pitch class.
pub fn analyze_all_rotations(selection: &[Degree]) -> Vec<AnalysisResult> {
    let set = PitchClassSet::from_degrees(selection);
    if set.is_empty() {
        return Vec::new();
    }

    if set == MAJOR_SCALE {
        log::debug!("major scale selection, listing the seven modes");
        return greek_rotations();
    }

    let semitones: Vec<u8> = set.iter().collect();
    let intervals = cyclic_intervals(&semitones);

    (0..intervals.len())
        .map(|i| {
            let rotated = rotate(&intervals, i);
            let degrees = spell_rotation(&rotated);
            let analysis = analyze(&degrees);
            log::debug!("rotation {}: {:?} -> {}", i + 1, rotated, analysis);
            AnalysisResult {
                index: i + 1,
                degrees,
                intervals: rotated,
                analysis,
            }
        })
        .collect()
}

fn greek_rotations() -> Vec<AnalysisResult> {
    greek_modes()
        .enumerate()
        .map(|(i, template)| AnalysisResult {
            index: i + 1,
            degrees: template.pattern.to_vec(),
            intervals: template.intervals.to_vec(),
            analysis: template.name.to_string(),
        })
        .collect()
}

fn rotate(intervals: &[u8], start: usize) -> Vec<u8> {
    let mut rotated = intervals.to_vec();
    rotated.rotate_left(start);
    rotated
}

/// Degrees of a rotation, walking its steps up from the tonic
fn spell_rotation(intervals: &[u8]) -> Vec<Degree> {
    let mut position = 0u8;
    let mut degrees = vec![Degree::TONIC];
    for step in intervals.iter().take(intervals.len().saturating_sub(1)) {
        position = (position + step) % 12;
        degrees.push(Degree::from_semitone(position));
    }
    degrees
}
