use pretty_assertions::assert_eq;
use seqlens_core::{analyze, AnalysisError, Strand};

fn orf_of(len: usize) -> String {
    format!("ATG{}TAA", "GCC".repeat(len / 3 - 2))
}

#[test]
fn test_full_result_json() {
    let result = analyze("GAATTC").unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json(false).unwrap()).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["dna_sequence"], "GAATTC");
    assert_eq!(json["restriction_sites"]["EcoRI"]["sequence"], "GAATTC");
    assert_eq!(json["restriction_sites"]["EcoRI"]["positions"], serde_json::json!([1]));
    assert_eq!(json["restriction_sites"].as_object().unwrap().len(), 1);
    assert_eq!(json["orfs"], serde_json::json!([]));
}

#[test]
fn test_orf_json_fields() {
    let result = analyze(&orf_of(63)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json(true).unwrap()).unwrap();

    assert_eq!(
        json["orfs"][0],
        serde_json::json!({
            "start": 1,
            "end": 63,
            "length": 63,
            "strand": "+",
            "frame": 1,
            "sequence": orf_of(63),
        })
    );
}

#[test]
fn test_multiline_mixed_case_input() {
    let raw = "ggatcc aagctt\nccgg\tGACGTC\r\n  gaattc\n";
    let result = analyze(raw).unwrap();

    assert_eq!(result.dna_sequence.as_str(), "GGATCCAAGCTTCCGGGACGTCGAATTC");
    let enzymes: Vec<&str> = result.restriction_sites.enzymes().collect();
    assert_eq!(enzymes, ["EcoRI", "HpaII", "SalI", "HindIII", "BamHI"]);
    assert_eq!(result.restriction_sites.get("BamHI").unwrap().positions, vec![1]);
    assert_eq!(result.restriction_sites.get("HindIII").unwrap().positions, vec![7]);
    assert_eq!(result.restriction_sites.get("HpaII").unwrap().positions, vec![13]);
    assert_eq!(result.restriction_sites.get("SalI").unwrap().positions, vec![17]);
    assert_eq!(result.restriction_sites.get("EcoRI").unwrap().positions, vec![23]);
}

#[test]
fn test_both_strands_in_one_coordinate_system() {
    let forward = orf_of(75);
    let minus = seqlens_core::operations::reverse_complement(&orf_of(90));
    let result = analyze(&format!("{}{}", forward, minus)).unwrap();

    assert_eq!(result.orfs.len(), 2);
    assert_eq!(result.orfs[0].strand, Strand::Reverse);
    assert_eq!((result.orfs[0].start, result.orfs[0].end), (76, 165));
    assert_eq!(result.orfs[1].strand, Strand::Forward);
    assert_eq!((result.orfs[1].start, result.orfs[1].end), (1, 75));
}

#[test]
fn test_invalid_input_has_no_result() {
    assert_eq!(analyze("ATGNNNTAA").unwrap_err(), AnalysisError::InvalidSequence);
    assert_eq!(analyze("\t\n").unwrap_err(), AnalysisError::EmptyInput);
}
