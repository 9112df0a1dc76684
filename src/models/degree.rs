// Degree - a scale step 1-7 with at most one accidental

use crate::analysis::errors::ModeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Base semitone of each step, indexed by `step - 1`
pub const STEP_SEMITONES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Preferred spelling of each semitone 0-11
const PREFERRED: [Degree; 12] = [
    Degree::new(1, Accidental::Natural),
    Degree::new(2, Accidental::Flat),
    Degree::new(2, Accidental::Natural),
    Degree::new(3, Accidental::Flat),
    Degree::new(3, Accidental::Natural),
    Degree::new(4, Accidental::Natural),
    Degree::new(4, Accidental::Sharp),
    Degree::new(5, Accidental::Natural),
    Degree::new(6, Accidental::Flat),
    Degree::new(6, Accidental::Natural),
    Degree::new(7, Accidental::Flat),
    Degree::new(7, Accidental::Natural),
];

/// Accidental applied to a scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    /// Semitone offset (-1, 0, +1)
    pub const fn offset(self) -> i8 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
        }
    }

    /// Parse an accidental marker: "b", "#", or "" for natural
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            _ => None,
        }
    }
}

/// A scale degree relative to the tonic, e.g. `1`, `3b`, `4#`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree {
    step: u8,
    accidental: Accidental,
}

impl Degree {
    pub const TONIC: Degree = Degree::new(1, Accidental::Natural);

    /// Build a degree from a step (1-7) and accidental.
    ///
    /// The step is not checked here; use `FromStr` for untrusted input.
    pub const fn new(step: u8, accidental: Accidental) -> Self {
        Self { step, accidental }
    }

    /// Preferred spelling for a semitone offset (taken mod 12)
    pub fn from_semitone(semitone: u8) -> Self {
        PREFERRED[(semitone % 12) as usize]
    }

    /// Base step 1-7
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Same step with the accidental removed
    pub fn to_natural(&self) -> Degree {
        Degree::new(self.step, Accidental::Natural)
    }

    /// Pitch-class distance from the tonic, 0-11
    pub fn semitone(&self) -> u8 {
        let base = STEP_SEMITONES[(self.step.clamp(1, 7) - 1) as usize] as i8;
        (base + self.accidental.offset()).rem_euclid(12) as u8
    }
}

impl FromStr for Degree {
    type Err = ModeError;

    /// Accepts exactly `^[1-7][#b]?$`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModeError::InvalidDegree(s.to_string());
        let mut chars = s.chars();

        let step = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|d| (1..=7).contains(d))
            .ok_or_else(invalid)? as u8;

        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('b') => Accidental::Flat,
            Some('#') => Accidental::Sharp,
            Some(_) => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Degree::new(step, accidental))
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.step, self.accidental.symbol())
    }
}

// Degrees cross the JS boundary as their string spelling
impl Serialize for Degree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Degree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Join degrees with single spaces, e.g. "1 3b 5"
pub fn join_degrees(degrees: &[Degree]) -> String {
    degrees.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(" ")
}
