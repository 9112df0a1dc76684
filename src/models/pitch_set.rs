// PitchClassSet - set of semitones 0-11 folded into one octave

use super::Degree;

/// A set of pitch classes stored as a 12-bit mask (bit n = semitone n)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub const EMPTY: PitchClassSet = PitchClassSet(0);

    pub const fn from_bits(bits: u16) -> Self {
        PitchClassSet(bits & 0x0FFF)
    }

    pub fn from_degrees<'a, I>(degrees: I) -> Self
    where
        I: IntoIterator<Item = &'a Degree>,
    {
        degrees.into_iter().map(|d| d.semitone()).collect()
    }

    pub fn insert(&mut self, semitone: u8) {
        self.0 |= 1 << (semitone % 12);
    }

    pub fn contains(self, semitone: u8) -> bool {
        self.0 & (1 << (semitone % 12)) != 0
    }

    pub fn contains_degree(self, degree: &Degree) -> bool {
        self.contains(degree.semitone())
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(self, other: PitchClassSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn union(self, other: PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 | other.0)
    }

    pub fn difference(self, other: PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 & !other.0)
    }

    /// Semitones in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..12u8).filter(move |&s| self.contains(s))
    }
}

impl FromIterator<u8> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = PitchClassSet::EMPTY;
        for semitone in iter {
            set.insert(semitone);
        }
        set
    }
}
