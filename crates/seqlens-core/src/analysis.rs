use log::debug;
use serde::Serialize;

use crate::enzyme::RESTRICTION_ENZYMES;
use crate::operations::gc_percent;
use crate::orf::{find_all_orfs, Orf};
use crate::search::{find_restriction_sites, RestrictionSites};
use crate::sequence::{normalize, DnaSequence};
use crate::AnalysisError;

/// Everything reported for one analyzed sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Percentage, 0 to 100
    pub gc_content: f64,
    pub restriction_sites: RestrictionSites,
    pub orfs: Vec<Orf>,
    pub dna_sequence: DnaSequence,
    pub success: bool,
}

impl AnalysisResult {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Normalize raw sequence text and analyze it.
///
/// Invalid input fails before any analysis runs.
pub fn analyze(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let sequence = normalize(raw)?;
    Ok(analyze_sequence(&sequence))
}

/// Analyze an already-normalized sequence
pub fn analyze_sequence(sequence: &DnaSequence) -> AnalysisResult {
    debug!("analyzing {} bp", sequence.len());

    let gc_content = gc_percent(sequence);
    debug!("GC content {:.2}%", gc_content);

    let restriction_sites = find_restriction_sites(sequence, &RESTRICTION_ENZYMES);
    debug!("{} enzymes with restriction sites", restriction_sites.len());

    let orfs = find_all_orfs(sequence);
    debug!("{} ORFs on both strands", orfs.len());

    AnalysisResult {
        gc_content,
        restriction_sites,
        orfs,
        dna_sequence: sequence.clone(),
        success: true,
    }
}
