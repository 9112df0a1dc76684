//! Altered-scale analysis
//!
//! Reads a rotation after the user has changed one degree's accidental, and
//! the alteration operation itself.

use super::codec::cyclic_intervals;
use super::conflict::duplicated_steps;
use super::errors::{ModeError, Result};
use super::matcher::{classify, Verdict};
use crate::models::mode::greek_modes;
use crate::models::{join_degrees, Accidental, Degree, ModeTemplate};

pub const CUSTOM_SCALE: &str = "Custom Scale";

/// Intervals and label of an altered scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlteredAnalysis {
    pub intervals: Vec<u8>,
    pub analysis: String,
}

/// Semitone of a degree in an altered context.
///
/// Covers the naturals and single accidentals on steps 2-7. Anything else
/// falls back to the standard mapping with a warning.
pub fn altered_semitone(degree: &Degree) -> u8 {
    let semitone = match (degree.step(), degree.accidental()) {
        (1, Accidental::Natural) => Some(0),
        (2, Accidental::Flat) => Some(1),
        (2, Accidental::Natural) => Some(2),
        (2, Accidental::Sharp) | (3, Accidental::Flat) => Some(3),
        (3, Accidental::Natural) | (4, Accidental::Flat) => Some(4),
        (3, Accidental::Sharp) | (4, Accidental::Natural) => Some(5),
        (4, Accidental::Sharp) | (5, Accidental::Flat) => Some(6),
        (5, Accidental::Natural) => Some(7),
        (5, Accidental::Sharp) | (6, Accidental::Flat) => Some(8),
        (6, Accidental::Natural) => Some(9),
        (6, Accidental::Sharp) | (7, Accidental::Flat) => Some(10),
        (7, Accidental::Natural) => Some(11),
        (7, Accidental::Sharp) => Some(0),
        _ => None,
    };
    semitone.unwrap_or_else(|| {
        log::warn!("Unknown degree: {}, falling back to standard mapping", degree);
        degree.semitone()
    })
}

/// Analyse degrees in the order given, after an alteration
pub fn analyze_altered_scale(degrees: &[Degree]) -> AlteredAnalysis {
    let semitones: Vec<u8> = degrees.iter().map(altered_semitone).collect();
    AlteredAnalysis {
        intervals: cyclic_intervals(&semitones),
        analysis: altered_label(degrees),
    }
}

fn altered_label(degrees: &[Degree]) -> String {
    let verdict = classify(degrees);
    if let Some(template) = verdict.template().filter(|t| t.is_greek()) {
        let outside = outside_pattern(template, degrees);
        if !outside.is_empty() {
            return format!("Altered {} + {}", template.name, join_degrees(&outside));
        }
    }

    match verdict {
        Verdict::Conflict => CUSTOM_SCALE.to_string(),
        Verdict::NoMatch if !duplicated_steps(degrees).is_empty() => CUSTOM_SCALE.to_string(),
        Verdict::NoMatch => match closest_greek_mode(degrees) {
            Some((template, differences)) if !differences.is_empty() => {
                format!("Altered {} + {}", template.name, join_degrees(&differences))
            }
            _ => Verdict::NoMatch.into_label(),
        },
        other => other.into_label(),
    }
}

/// Input spellings the template does not spell on the same step
fn outside_pattern(template: &ModeTemplate, degrees: &[Degree]) -> Vec<Degree> {
    let mut outside: Vec<Degree> = Vec::new();
    for degree in degrees {
        if template.degree_on_step(degree.step()) != Some(*degree) && !outside.contains(degree) {
            outside.push(*degree);
        }
    }
    outside
}

/// Greek mode needing the fewest respelled steps, earliest declared on ties.
///
/// Each input degree is compared with the mode's spelling of the same step;
/// the degrees that differ are returned with the mode.
pub fn closest_greek_mode(degrees: &[Degree]) -> Option<(&'static ModeTemplate, Vec<Degree>)> {
    let mut best: Option<(&'static ModeTemplate, Vec<Degree>)> = None;
    for template in greek_modes() {
        let differences: Vec<Degree> = degrees
            .iter()
            .copied()
            .filter(|d| template.degree_on_step(d.step()) != Some(*d))
            .collect();
        if best.as_ref().map_or(true, |(_, top)| differences.len() < top.len()) {
            best = Some((template, differences));
        }
    }
    best
}

/// Change the accidental of the degree on `step`.
///
/// Fails when no degree sits on that step, or when the result would spell
/// any step two ways.
pub fn apply_alteration(degrees: &[Degree], step: u8, accidental: Accidental) -> Result<Vec<Degree>> {
    let position = degrees
        .iter()
        .position(|d| d.step() == step)
        .ok_or(ModeError::StepNotFound(step))?;
    let requested = Degree::new(step, accidental);

    let mut altered = degrees.to_vec();
    altered[position] = requested;

    let clashes = duplicated_steps(&altered);
    if let Some(clash) = clashes.iter().copied().find(|&s| s == step).or(clashes.first().copied()) {
        let mut spellings = altered.iter().copied().filter(|d| d.step() == clash);
        let (existing, requested) = if clash == step {
            (spellings.find(|d| *d != requested), requested)
        } else {
            let first = spellings.next();
            (first, spellings.find(|d| Some(*d) != first).unwrap_or(requested))
        };
        if let Some(existing) = existing {
            return Err(ModeError::AlterationConflict { existing, requested });
        }
    }

    Ok(altered)
}
