use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::operations;
use crate::AnalysisError;

static DNA_ALPHABET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ATCG]+$").expect("alphabet pattern is a valid regex")
});

/// A normalized DNA sequence: non-empty, uppercase, restricted to A/T/C/G.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DnaSequence(String);

impl DnaSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The opposite strand, read 5' to 3'.
    pub fn reverse_complement(&self) -> DnaSequence {
        DnaSequence(operations::reverse_complement(&self.0))
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strip all whitespace, uppercase, and validate against the A/T/C/G alphabet.
///
/// Nothing is returned on failure; an input that cleans down to nothing is
/// `EmptyInput`, anything else outside the alphabet is `InvalidSequence`.
pub fn normalize(raw: &str) -> Result<DnaSequence, AnalysisError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !is_separator(*c))
        .collect::<String>()
        .to_uppercase();

    if cleaned.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if !DNA_ALPHABET.is_match(&cleaned) {
        return Err(AnalysisError::InvalidSequence);
    }

    Ok(DnaSequence(cleaned))
}

impl TryFrom<&str> for DnaSequence {
    type Error = AnalysisError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

impl TryFrom<String> for DnaSequence {
    type Error = AnalysisError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        normalize(&raw)
    }
}

impl From<DnaSequence> for String {
    fn from(seq: DnaSequence) -> Self {
        seq.0
    }
}

impl AsRef<str> for DnaSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
