//! Models module for the Modal Oracle
//!
//! Scale degrees, pitch-class sets, the static mode templates and the
//! per-rotation analysis result.

pub mod analysis;
pub mod degree;
pub mod mode;
pub mod pitch_set;

// Re-export commonly used types
pub use analysis::AnalysisResult;
pub use degree::{join_degrees, Accidental, Degree};
pub use mode::{CatalogScale, ModeCategory, ModeTemplate, SpecialPattern};
pub use pitch_set::PitchClassSet;
