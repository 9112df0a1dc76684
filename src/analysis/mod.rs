//! Mode inference engine
//!
//! Pure functions over scale degrees, leaf-first:
//!
//! - `codec`: degree tokens to semitones, interval sequences
//! - `enharmonic`: preferred spellings and tritone display
//! - `patterns`: fixed idiomatic scales (blues, octatonic, ...)
//! - `conflict`: irreconcilable spellings of one base step
//! - `matcher`: best-fitting mode template and its label
//! - `rotation`: every rotation of a selection, analysed
//! - `altered`: altered-scale reading and degree alteration
//! - `catalog`: named scales containing a selection

pub mod altered;
pub mod catalog;
pub mod codec;
pub mod conflict;
pub mod enharmonic;
pub mod errors;
pub mod matcher;
pub mod patterns;
pub mod rotation;

pub use altered::{analyze_altered_scale, apply_alteration, AlteredAnalysis};
pub use catalog::scales_containing;
pub use codec::{degree_to_semitone, degrees_to_intervals};
pub use conflict::has_conflict;
pub use enharmonic::normalize;
pub use errors::{ModeError, Result};
pub use matcher::{analyze, classify, Verdict};
pub use rotation::analyze_all_rotations;
