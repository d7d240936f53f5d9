pub mod analysis;
pub mod codon;
pub mod enzyme;
pub mod operations;
pub mod orf;
pub mod search;
pub mod sequence;

pub use analysis::{analyze, analyze_sequence, AnalysisResult};
pub use orf::{Orf, Strand};
pub use search::{RestrictionSites, SiteHit};
pub use sequence::DnaSequence;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Empty DNA sequence")]
    EmptyInput,
    #[error("Invalid DNA sequence. Only A, T, C, and G are allowed (case insensitive).")]
    InvalidSequence,
    #[error("An error occurred: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// True for errors caused by the caller's input rather than by the analysis.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AnalysisError::EmptyInput | AnalysisError::InvalidSequence)
    }
}
