//! Candidate list construction

use std::collections::HashSet;

use crate::types::ModelCandidate;

/// Merge discovered models with the static fallback list
///
/// Discovered ids come first in their original order, then fallback ids that
/// were not already seen. No id appears twice.
pub fn merge_candidates(discovered: &[String], fallback: &[String]) -> Vec<ModelCandidate> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(discovered.len() + fallback.len());
    let mut candidates = Vec::with_capacity(discovered.len() + fallback.len());

    for id in discovered {
        if seen.insert(id.as_str()) {
            candidates.push(ModelCandidate::discovered(id.as_str()));
        }
    }

    for id in fallback {
        if seen.insert(id.as_str()) {
            candidates.push(ModelCandidate::fallback(id.as_str()));
        }
    }

    candidates
}
