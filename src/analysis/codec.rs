//! Degree/semitone codec
//!
//! Maps degree tokens to semitone offsets and derives interval sequences.

use super::errors::{ModeError, Result};
use crate::models::degree::STEP_SEMITONES;

/// Semitone offset (0-11) of a degree token.
///
/// The token is a base step 1-7 followed by a run of one accidental kind
/// (`"3b"`, `"5bb"`, `"4#"`); each marker moves the pitch by one semitone.
/// Mixed runs such as `"4#b"` are rejected.
pub fn degree_to_semitone(token: &str) -> Result<u8> {
    let invalid = || ModeError::InvalidDegree(token.to_string());
    let mut chars = token.chars();

    let step = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .filter(|d| (1..=7).contains(d))
        .ok_or_else(invalid)? as usize;

    let run: Vec<char> = chars.collect();
    let offset = match run.first() {
        None => 0,
        Some(&marker @ ('#' | 'b')) => {
            if run.iter().any(|&c| c != marker) {
                return Err(invalid());
            }
            let sign = if marker == '#' { 1 } else { -1 };
            sign * run.len() as i32
        }
        Some(_) => return Err(invalid()),
    };

    Ok((STEP_SEMITONES[step - 1] as i32 + offset).rem_euclid(12) as u8)
}

/// Interval sequence of degree tokens taken in the given order.
///
/// Each entry is the step from one degree to the next, wrapping from the
/// last back to the first. Steps that are not positive gain an octave, so
/// a repeated pitch (or a lone degree) counts as 12. The tokens are not
/// sorted here.
pub fn degrees_to_intervals<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>> {
    let semitones = tokens
        .iter()
        .map(|t| degree_to_semitone(t.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(cyclic_intervals(&semitones))
}

/// Cyclic steps between consecutive semitones
pub fn cyclic_intervals(semitones: &[u8]) -> Vec<u8> {
    let n = semitones.len();
    (0..n)
        .map(|i| {
            let current = semitones[i] as i16;
            let next = semitones[(i + 1) % n] as i16;
            let step = next - current;
            (if step <= 0 { step + 12 } else { step }) as u8
        })
        .collect()
}
