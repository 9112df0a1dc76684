//! Error types for mode analysis
//!
//! Musical ambiguity is never an error: "no match" and "conflicting degrees"
//! are ordinary analysis labels. These errors only cover malformed input.

use crate::models::Degree;
use thiserror::Error;

/// Errors raised while parsing or editing scale degrees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Token is not a scale degree (base step 1-7, one accidental kind)
    #[error("Invalid scale degree: '{0}'")]
    InvalidDegree(String),

    /// An alteration targets a base step that is not in the degree list
    #[error("No degree with base step {0} to alter")]
    StepNotFound(u8),

    /// An alteration would spell one base step two different ways
    #[error("Cannot alter to {requested}: step already spelled as {existing}")]
    AlterationConflict { existing: Degree, requested: Degree },
}

pub type Result<T> = std::result::Result<T, ModeError>;
