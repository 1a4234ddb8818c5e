use std::collections::BTreeSet;

/// Jaccard index of two interest sets: `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets are considered identical (1.0). If only one is empty they share nothing (0.0).
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let shared = a.intersection(b).count();
            let total = a.len() + b.len() - shared;
            shared as f64 / total as f64
        }
    }
}
