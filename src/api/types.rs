//! Shared types for the WASM API
//!
//! Result shapes handed to the JavaScript renderer.

use crate::analysis::AlteredAnalysis;
use crate::models::analysis::join_intervals;
use crate::models::{join_degrees, AnalysisResult};
use serde::{Deserialize, Serialize};

/// One selected piano key, labelled relative to the reference tonic
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SelectedNote {
    pub degree_label: String,
}

/// One analysed rotation, strings space-joined for display
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RotationView {
    pub index: usize,
    pub rotation: String,
    pub intervals: String,
    pub analysis: String,
}

impl From<&AnalysisResult> for RotationView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            index: result.index,
            rotation: join_degrees(&result.degrees),
            intervals: result.intervals_string(),
            analysis: result.analysis.clone(),
        }
    }
}

/// Altered-scale reading
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AlteredView {
    pub intervals: String,
    pub analysis: String,
}

impl From<AlteredAnalysis> for AlteredView {
    fn from(result: AlteredAnalysis) -> Self {
        Self {
            intervals: join_intervals(&result.intervals),
            analysis: result.analysis,
        }
    }
}
