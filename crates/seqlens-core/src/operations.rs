use crate::sequence::DnaSequence;

/// Complement a single DNA base
pub fn complement_base(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.bytes()
        .rev()
        .map(|b| complement_base(b) as char)
        .collect()
}

/// Calculate GC content as a fraction (0.0 to 1.0)
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc_count = seq
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc_count as f64 / seq.len() as f64
}

/// GC content of a normalized sequence as a percentage (0 to 100)
pub fn gc_percent(seq: &DnaSequence) -> f64 {
    gc_content(seq.as_str()) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::normalize;

    #[test]
    fn test_complement_base() {
        assert_eq!(complement_base(b'A'), b'T');
        assert_eq!(complement_base(b'T'), b'A');
        assert_eq!(complement_base(b'G'), b'C');
        assert_eq!(complement_base(b'c'), b'G');
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATCGATCG"), "CGATCGAT");
        assert_eq!(reverse_complement("AAAAAA"), "TTTTTT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_reverse_complement_twice() {
        let seq = "GATTACACCGGTTAGC";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
    }

    #[test]
    fn test_gc_content() {
        assert!((gc_content("ATCG") - 0.5).abs() < f64::EPSILON);
        assert!((gc_content("GGCC") - 1.0).abs() < f64::EPSILON);
        assert!((gc_content("AATT") - 0.0).abs() < f64::EPSILON);
        assert!((gc_content("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gc_content_case_invariant() {
        assert_eq!(gc_content("atcg"), gc_content("ATCG"));
    }

    #[test]
    fn test_gc_percent() {
        let seq = normalize("GGCA").unwrap();
        assert!((gc_percent(&seq) - 75.0).abs() < 1e-9);
    }
}
