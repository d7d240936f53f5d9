//! Codons that delimit an open reading frame.

pub const START_CODON: &[u8; 3] = b"ATG";

pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}
