use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::codon::{is_start_codon, is_stop_codon};
use crate::sequence::DnaSequence;

/// Shortest region, start and stop codons included, reported as an ORF
pub const MIN_ORF_LENGTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// Open reading frame result
///
/// `start` and `end` are 1-based forward-strand coordinates for both strands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub strand: Strand,
    /// Reading frame 1, 2 or 3, counted from the 5' end of the scanned strand
    pub frame: u8,
    pub sequence: String,
}

/// Find ORFs on both strands of a sequence, longest first.
///
/// Ties keep discovery order: forward strand before reverse, frames ascending.
pub fn find_all_orfs(seq: &DnaSequence) -> Vec<Orf> {
    let mut orfs = find_orfs(seq.as_str(), Strand::Forward, 0);
    let rc = seq.reverse_complement();
    orfs.extend(find_orfs(rc.as_str(), Strand::Reverse, 0));

    // sort_by_key is stable
    orfs.sort_by_key(|o| Reverse(o.length));
    orfs
}

/// Find open reading frames on a single strand.
///
/// `strand_seq` is read 5' to 3'; for `Strand::Reverse` it must be the reverse
/// complement of the forward sequence so positions can be mapped back. `offset`
/// shifts forward-strand coordinates only.
pub fn find_orfs(strand_seq: &str, strand: Strand, offset: usize) -> Vec<Orf> {
    let bases = strand_seq.as_bytes();
    let mut orfs = Vec::new();

    for frame_offset in 0..3 {
        find_orfs_in_frame(strand_seq, bases, frame_offset, strand, offset, &mut orfs);
    }

    orfs
}

fn find_orfs_in_frame(
    strand_seq: &str,
    bases: &[u8],
    frame_offset: usize,
    strand: Strand,
    offset: usize,
    orfs: &mut Vec<Orf>,
) {
    let n = bases.len();
    let mut i = frame_offset;
    while i + 2 < n {
        if !is_start_codon(&bases[i..i + 3]) {
            i += 3;
            continue;
        }

        let Some(j) = next_stop(bases, i + 3) else {
            // no stop left in this frame, so no later start can close either
            return;
        };

        let length = j + 3 - i;
        if length >= MIN_ORF_LENGTH {
            let (start, end) = match strand {
                Strand::Forward => (i + 1 + offset, j + 3 + offset),
                Strand::Reverse => (n - j - 2, n - i),
            };
            orfs.push(Orf {
                start,
                end,
                length,
                strand,
                frame: frame_offset as u8 + 1,
                sequence: strand_seq[i..j + 3].to_string(),
            });
        }
        // starts nested before this stop are not reported
        i = j + 3;
    }
}

/// Index of the first in-frame stop codon at or after `from`
fn next_stop(bases: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j + 2 < bases.len() {
        if is_stop_codon(&bases[j..j + 3]) {
            return Some(j);
        }
        j += 3;
    }
    None
}
