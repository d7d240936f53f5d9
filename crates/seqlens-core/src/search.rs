use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::enzyme::RestrictionEnzyme;
use crate::sequence::DnaSequence;

/// Every position at which one enzyme's site occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteHit {
    #[serde(skip)]
    pub enzyme: &'static str,
    pub sequence: &'static str,
    /// 1-based, ascending
    pub positions: Vec<usize>,
}

/// Site hits keyed by enzyme name, in enzyme table order.
///
/// Serializes as a JSON object; enzymes without a hit are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSites {
    hits: Vec<SiteHit>,
}

impl RestrictionSites {
    pub fn get(&self, enzyme: &str) -> Option<&SiteHit> {
        self.hits.iter().find(|h| h.enzyme == enzyme)
    }

    pub fn enzymes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hits.iter().map(|h| h.enzyme)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl Serialize for RestrictionSites {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hits.len()))?;
        for hit in &self.hits {
            map.serialize_entry(hit.enzyme, hit)?;
        }
        map.end()
    }
}

/// Find every exact occurrence of a pattern, overlapping ones included.
/// Returns 0-based start indices in ascending order.
pub fn find_pattern(sequence: &str, pattern: &str) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > sequence.len() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut pos = 0;
    while let Some(idx) = sequence[pos..].find(pattern) {
        let abs_pos = pos + idx;
        matches.push(abs_pos);
        pos = abs_pos + 1;
    }
    matches
}

/// Scan a sequence for each enzyme's recognition site
pub fn find_restriction_sites(
    sequence: &DnaSequence,
    enzymes: &[RestrictionEnzyme],
) -> RestrictionSites {
    let hits = enzymes
        .iter()
        .filter_map(|enzyme| {
            let positions: Vec<usize> = find_pattern(sequence.as_str(), enzyme.site)
                .into_iter()
                .map(|p| p + 1)
                .collect();
            if positions.is_empty() {
                None
            } else {
                Some(SiteHit {
                    enzyme: enzyme.name,
                    sequence: enzyme.site,
                    positions,
                })
            }
        })
        .collect();

    RestrictionSites { hits }
}
