use serde::Serialize;

/// A restriction enzyme and the exact site it recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestrictionEnzyme {
    pub name: &'static str,
    /// Recognition site, uppercase, no ambiguity codes.
    pub site: &'static str,
}

/// Enzymes scanned for in every analysis, in reporting order.
pub static RESTRICTION_ENZYMES: [RestrictionEnzyme; 5] = [
    RestrictionEnzyme { name: "EcoRI", site: "GAATTC" },
    RestrictionEnzyme { name: "HpaII", site: "CCGG" },
    RestrictionEnzyme { name: "SalI", site: "GACGTC" },
    RestrictionEnzyme { name: "HindIII", site: "AAGCTT" },
    RestrictionEnzyme { name: "BamHI", site: "GGATCC" },
];
