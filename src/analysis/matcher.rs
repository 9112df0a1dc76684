//! Mode matcher
//!
//! Decision order, first hit wins:
//! 1. empty selection
//! 2. conflicting spellings
//! 3. fixed idiomatic patterns
//! 4. Locrian by pitch-class set (either tritone spelling)
//! 5. exact interval match of a full seven-note set
//! 6. template scoring for incomplete or altered sets
//! 7. interval sonorities for three degrees or fewer

use super::codec::cyclic_intervals;
use super::conflict::has_conflict;
use super::enharmonic::{display_tritone, has_plain_four, is_tritone, normalize_all};
use super::patterns::match_special_pattern;
use crate::models::mode::{greek_modes, interval_templates, template_by_name};
use crate::models::{Degree, ModeTemplate, PitchClassSet};

pub const NO_NOTES: &str = "No notes selected";
pub const NO_MATCH: &str = "No matching mode found";
pub const CONFLICTING: &str = "No matching mode found - conflicting degrees";

const ESSENTIAL_WEIGHT: i32 = 2;
const AVOID_WEIGHT: i32 = 1;

/// Largest selection that may be read as an interval sonority
const MAX_INTERVAL_DEGREES: usize = 3;

/// Outcome of matching one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Empty,
    Conflict,
    /// A fixed idiomatic pattern, e.g. "Blues scale"
    Pattern(String),
    /// A Greek mode or interval template, with its full display label
    Mode {
        template: &'static ModeTemplate,
        label: String,
    },
    NoMatch,
}

impl Verdict {
    pub fn label(&self) -> &str {
        match self {
            Verdict::Empty => NO_NOTES,
            Verdict::Conflict => CONFLICTING,
            Verdict::Pattern(name) => name.as_str(),
            Verdict::Mode { label, .. } => label.as_str(),
            Verdict::NoMatch => NO_MATCH,
        }
    }

    pub fn into_label(self) -> String {
        match self {
            Verdict::Pattern(label) | Verdict::Mode { label, .. } => label,
            other => other.label().to_string(),
        }
    }

    pub fn template(&self) -> Option<&'static ModeTemplate> {
        match self {
            Verdict::Mode { template, .. } => Some(*template),
            _ => None,
        }
    }
}

/// Display label for a selection of degrees
pub fn analyze(degrees: &[Degree]) -> String {
    classify(degrees).into_label()
}

/// Match a selection against the fixed patterns and mode templates
pub fn classify(degrees: &[Degree]) -> Verdict {
    if degrees.is_empty() {
        return Verdict::Empty;
    }
    if has_conflict(degrees) {
        return Verdict::Conflict;
    }

    let normalized = normalize_all(degrees);
    let set = PitchClassSet::from_degrees(&normalized);

    if let Some(name) = match_special_pattern(set) {
        return Verdict::Pattern(name);
    }

    if let Some(locrian) = template_by_name("Locrian") {
        if set.len() == 7 && set == locrian.pattern_set() {
            return whole_mode(locrian);
        }
    }

    if set.len() == 7 {
        if let Some(template) = exact_greek_match(set) {
            return whole_mode(template);
        }
        log::debug!("seven degrees without an exact mode, scoring instead");
    }

    if let Some(template) = best_greek_template(set) {
        return Verdict::Mode {
            template,
            label: describe(template, set, has_plain_four(degrees)),
        };
    }

    if set.len() <= MAX_INTERVAL_DEGREES {
        if let Some(template) = interval_templates().find(|t| t.essential_set().is_subset(set)) {
            return Verdict::Mode {
                template,
                label: describe_interval(template, set),
            };
        }
    }

    Verdict::NoMatch
}

fn whole_mode(template: &'static ModeTemplate) -> Verdict {
    Verdict::Mode {
        template,
        label: template.name.to_string(),
    }
}

/// Greek mode whose step pattern equals the set's, read up from the tonic
fn exact_greek_match(set: PitchClassSet) -> Option<&'static ModeTemplate> {
    if !set.contains(0) {
        return None;
    }
    let semitones: Vec<u8> = set.iter().collect();
    let intervals = cyclic_intervals(&semitones);
    greek_modes().find(|t| t.intervals == intervals.as_slice())
}

/// Score of a template against a set, or None when it cannot claim the set.
///
/// Every essential must be present and every pitch must be in the pattern
/// or the permitted alterations. Essentials count for, pitches outside the
/// pattern count against.
pub fn template_score(template: &ModeTemplate, set: PitchClassSet) -> Option<i32> {
    let essential = template.essential_set();
    if !essential.is_subset(set) {
        return None;
    }
    let pattern = template.pattern_set();
    if !set.is_subset(pattern.union(template.alteration_set())) {
        return None;
    }
    let avoid = set.difference(pattern).len() as i32;
    Some(ESSENTIAL_WEIGHT * essential.len() as i32 - AVOID_WEIGHT * avoid)
}

/// Highest scoring Greek template, earliest declared on ties
fn best_greek_template(set: PitchClassSet) -> Option<&'static ModeTemplate> {
    let mut best: Option<(&'static ModeTemplate, i32)> = None;
    for template in greek_modes() {
        let Some(score) = template_score(template, set) else {
            continue;
        };
        log::debug!("{} scores {}", template.name, score);
        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((template, score));
        }
    }
    best.map(|(template, _)| template)
}

/// "<Name> <alterations> <omissions>"
fn describe(template: &ModeTemplate, set: PitchClassSet, plain_four: bool) -> String {
    let alterations: Vec<Degree> = template
        .alterations
        .iter()
        .filter(|alt| set.contains_degree(alt))
        .map(|alt| if is_tritone(alt) { display_tritone(plain_four) } else { *alt })
        .collect();

    let omissions = template.omissions.iter().filter(|omitted| {
        !set.contains_degree(omitted) && !alterations.iter().any(|alt| alt.step() == omitted.step())
    });

    let mut tokens = vec![template.name.to_string()];
    tokens.extend(alterations.iter().map(|alt| alt.to_string()));
    tokens.extend(omissions.map(|omitted| format!("no{}", omitted)));
    tokens.join(" ")
}

fn describe_interval(template: &ModeTemplate, set: PitchClassSet) -> String {
    let mut tokens = vec![template.name.to_string()];
    tokens.extend(
        template
            .alterations
            .iter()
            .filter(|alt| set.contains_degree(alt))
            .map(|alt| alt.to_string()),
    );
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(tokens: &[&str]) -> String {
        let degrees: Vec<Degree> = tokens.iter().map(|t| t.parse().unwrap()).collect();
        analyze(&degrees)
    }

    #[test]
    fn test_empty() {
        assert_eq!(label(&[]), "No notes selected");
    }

    #[test]
    fn test_full_greek_modes() {
        assert_eq!(label(&["1", "2", "3", "4", "5", "6", "7"]), "Ionian");
        assert_eq!(label(&["1", "2", "3b", "4", "5", "6", "7b"]), "Dorian");
        assert_eq!(label(&["1", "2b", "3b", "4", "5", "6b", "7b"]), "Phrygian");
        assert_eq!(label(&["1", "2", "3", "4#", "5", "6", "7"]), "Lydian");
        assert_eq!(label(&["1", "2", "3", "4", "5", "6", "7b"]), "Mixolydian");
        assert_eq!(label(&["1", "2", "3b", "4", "5", "6b", "7b"]), "Aeolian");
    }

    #[test]
    fn test_locrian_either_tritone_spelling() {
        assert_eq!(label(&["1", "2b", "3b", "4", "5b", "6b", "7b"]), "Locrian");
        assert_eq!(label(&["1", "2b", "3b", "4", "4#", "6b", "7b"]), "Locrian");
    }

    #[test]
    fn test_triads() {
        assert_eq!(label(&["1", "3", "5"]), "Ionian no2 no4 no6 no7");
        assert_eq!(label(&["1", "3b", "5"]), "Aeolian no2 no4 no6b no7b");
        assert_eq!(label(&["1", "3b", "5b"]), "Locrian no2b no4 no6b no7b");
    }

    #[test]
    fn test_essentials_pick_the_mode() {
        assert_eq!(label(&["1", "3", "5", "7b"]), "Mixolydian no2 no4 no6");
        assert_eq!(label(&["1", "3b", "5", "6"]), "Dorian no2 no4 no7b");
        assert_eq!(label(&["1", "3", "4#", "7"]), "Lydian no2 no5 no6");
    }

    #[test]
    fn test_alterations_displayed() {
        assert_eq!(label(&["1", "3", "5", "6b", "7"]), "Ionian 5# no2 no4 no6");
        assert_eq!(label(&["1", "2", "3", "4", "5b", "6", "7"]), "Ionian 5b");
        assert_eq!(label(&["1", "3", "4#", "5", "6", "7b"]), "Mixolydian 4# no2");
    }

    #[test]
    fn test_conflict_short_circuits() {
        assert_eq!(label(&["1", "3", "3b", "5"]), CONFLICTING);
    }

    #[test]
    fn test_special_patterns_win() {
        assert_eq!(label(&["1", "3b", "3", "4", "5", "7b"]), "Blues scale");
        assert_eq!(label(&["1", "2", "3b", "4", "5", "6b", "6", "7b"]), "Aeolian 6");
    }

    #[test]
    fn test_interval_sonorities() {
        assert_eq!(label(&["1", "2"]), "Sus2");
        assert_eq!(label(&["1", "4"]), "Sus4");
        assert_eq!(label(&["1", "4", "4#"]), "Sus4 4#");
        assert_eq!(label(&["1", "7"]), "Major 7");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(label(&["1", "5"]), NO_MATCH);
        assert_eq!(label(&["2", "3", "5"]), NO_MATCH);
    }

    #[test]
    fn test_template_score() {
        let ionian = template_by_name("Ionian").unwrap();
        let triad: PitchClassSet = [0, 4, 7].into_iter().collect();
        assert_eq!(template_score(ionian, triad), Some(4));
        let minor: PitchClassSet = [0, 3, 7].into_iter().collect();
        assert_eq!(template_score(ionian, minor), None);
    }
}
