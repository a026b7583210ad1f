use super::similarity::distance;
use crate::models::reference::ReferenceSet;

/// Largest edit distance at which a popular domain is offered as a correction.
pub const DOMAIN_SUGGESTION_THRESHOLD: usize = 3;

/// Largest edit distance at which a popular TLD is offered as a correction.
pub const TLD_SUGGESTION_THRESHOLD: usize = 2;

/// The reference entry nearest to a queried string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionCandidate<'a> {
    pub value: &'a str,
    pub distance: usize,
}

/// Finds the member of `reference` with the smallest edit distance to
/// `candidate`.
///
/// Ties go to the lexicographically smallest member. Returns `None` for an
/// empty set.
pub fn nearest<'a>(candidate: &str, reference: &'a ReferenceSet) -> Option<SuggestionCandidate<'a>> {
    reference
        .iter()
        .map(|value| SuggestionCandidate {
            value,
            distance: distance(candidate, value),
        })
        .min_by_key(|c| c.distance)
}

/// Suggests a correction for `candidate` drawn from `reference`.
///
/// - an exact member needs no correction and yields `None`
/// - otherwise the nearest member is returned when its distance is at most
///   `threshold`, and `None` when it is further away or the set is empty
pub fn suggest<'a>(candidate: &str, reference: &'a ReferenceSet, threshold: usize) -> Option<&'a str> {
    if reference.contains(candidate) {
        return None;
    }

    nearest(candidate, reference)
        .filter(|c| c.distance <= threshold)
        .map(|c| c.value)
}
