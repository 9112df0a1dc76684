// AnalysisResult - one analysed rotation

use super::Degree;

/// The mode reading of one rotation of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// 1-based rotation number
    pub index: usize,
    /// Degrees relative to the rotation's own tonic, ascending
    pub degrees: Vec<Degree>,
    /// Semitone steps around the cycle, starting at the tonic
    pub intervals: Vec<u8>,
    pub analysis: String,
}

impl AnalysisResult {
    pub fn intervals_string(&self) -> String {
        join_intervals(&self.intervals)
    }
}

pub fn join_intervals(intervals: &[u8]) -> String {
    intervals.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}
