//! Static mode templates
//!
//! The tables are generated at build time from modes.yaml (see build.rs) and
//! are read-only for the lifetime of the program.

use super::{Accidental, Degree, PitchClassSet};

/// Which family a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCategory {
    /// One of the seven rotations of the major scale
    Greek,
    /// Two-note sonority, only tried for selections of three degrees or fewer
    Interval,
}

/// A named canonical pattern with its matching rules
#[derive(Debug, PartialEq, Eq)]
pub struct ModeTemplate {
    pub name: &'static str,
    pub category: ModeCategory,
    /// Canonical spelling, ascending
    pub pattern: &'static [Degree],
    /// Semitone steps around the octave (Greek templates only)
    pub intervals: &'static [u8],
    /// Degrees that must be present to claim the name
    pub essential: &'static [Degree],
    /// Pattern degrees that may be absent
    pub omissions: &'static [Degree],
    /// Chromatic degrees that may be added while keeping the name
    pub alterations: &'static [Degree],
}

impl ModeTemplate {
    pub fn pattern_set(&self) -> PitchClassSet {
        PitchClassSet::from_degrees(self.pattern)
    }

    pub fn essential_set(&self) -> PitchClassSet {
        PitchClassSet::from_degrees(self.essential)
    }

    pub fn alteration_set(&self) -> PitchClassSet {
        PitchClassSet::from_degrees(self.alterations)
    }

    pub fn is_greek(&self) -> bool {
        self.category == ModeCategory::Greek
    }

    /// Pattern spelling used on a given base step, if any
    pub fn degree_on_step(&self, step: u8) -> Option<Degree> {
        self.pattern.iter().copied().find(|d| d.step() == step)
    }
}

/// An idiomatic scale recognised by exact pitch-class set
#[derive(Debug)]
pub struct SpecialPattern {
    pub name: &'static str,
    pub variants: &'static [&'static [Degree]],
}

impl SpecialPattern {
    pub fn matches(&self, set: PitchClassSet) -> bool {
        self.variants
            .iter()
            .any(|variant| PitchClassSet::from_degrees(variant.iter()) == set)
    }
}

/// A named scale in the lookup catalog
#[derive(Debug)]
pub struct CatalogScale {
    pub name: &'static str,
    pub degrees: &'static [Degree],
}

impl CatalogScale {
    pub fn pitch_classes(&self) -> PitchClassSet {
        PitchClassSet::from_degrees(self.degrees)
    }
}

include!(concat!(env!("OUT_DIR"), "/mode_tables.rs"));

/// The seven Greek modes, Ionian first
pub fn greek_modes() -> impl Iterator<Item = &'static ModeTemplate> {
    MODE_TEMPLATES.iter().filter(|t| t.category == ModeCategory::Greek)
}

/// Sus2, Sus4 and Major 7, in the order they are tried
pub fn interval_templates() -> impl Iterator<Item = &'static ModeTemplate> {
    MODE_TEMPLATES.iter().filter(|t| t.category == ModeCategory::Interval)
}

pub fn template_by_name(name: &str) -> Option<&'static ModeTemplate> {
    MODE_TEMPLATES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tables_loaded() {
        let names: Vec<_> = greek_modes().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian"]
        );
        let dyads: Vec<_> = interval_templates().map(|t| t.name).collect();
        assert_eq!(dyads, vec!["Sus2", "Sus4", "Major 7"]);
    }

    #[test]
    fn test_intervals_match_pattern() {
        for template in greek_modes() {
            let semitones: Vec<u8> = template.pattern.iter().map(|d| d.semitone()).collect();
            let steps: Vec<u8> = (0..7)
                .map(|i| (semitones[(i + 1) % 7] + 12 - semitones[i]) % 12)
                .map(|s| if s == 0 { 12 } else { s })
                .collect();
            assert_eq!(steps, template.intervals, "{}", template.name);
            assert_eq!(template.intervals.iter().map(|&i| i as u32).sum::<u32>(), 12);
        }
    }

    #[test]
    fn test_locrian_spells_tritone_as_flat_five() {
        let locrian = template_by_name("Locrian").unwrap();
        assert_eq!(locrian.degree_on_step(5), Some(Degree::new(5, Accidental::Flat)));
        assert!(template_by_name("Blues").is_none());
    }

    #[test]
    fn test_special_patterns_present() {
        let blues = SPECIAL_PATTERNS.iter().find(|p| p.name == "Blues scale").unwrap();
        let set: PitchClassSet = [0, 3, 4, 7, 10].into_iter().collect();
        assert!(blues.matches(set));
        assert!(!SCALE_CATALOG.is_empty());
    }
}
