use crate::model::Listing;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupOutcome {
    /// Candidates not seen before, in candidate order.
    pub new_ones: Vec<Listing>,
    /// `known` followed by `new_ones`.
    pub merged: Vec<Listing>,
}

impl DedupOutcome {
    pub fn has_new(&self) -> bool {
        !self.new_ones.is_empty()
    }
}

/// Splits `candidates` into the listings whose `href` is not in `known`.
///
/// Only `href` is compared; other field differences are ignored. A href that
/// repeats within `candidates` is kept once, at its first position.
pub fn filter_new(known: &[Listing], candidates: Vec<Listing>) -> DedupOutcome {
    let mut seen: HashSet<&str> = known.iter().map(|l| l.href.as_str()).collect();

    let mut new_ones = Vec::new();
    for candidate in &candidates {
        if seen.insert(candidate.href.as_str()) {
            new_ones.push(candidate.clone());
        }
    }

    let mut merged = Vec::with_capacity(known.len() + new_ones.len());
    merged.extend_from_slice(known);
    merged.extend(new_ones.iter().cloned());

    DedupOutcome { new_ones, merged }
}
