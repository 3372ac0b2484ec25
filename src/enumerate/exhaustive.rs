use log::debug;

use crate::enumerate::multisets::candidate_multisets;
use crate::enumerate::orderings::distinct_ordering_count;
use crate::input::StepAlphabet;

/// Brute-force path count
///
/// Enumerates every candidate multiset up to the step-count bound, keeps the
/// ones summing to the target, and totals their distinct orderings. This is
/// exponential in `target / smallest_step`; it exists as a cross-check oracle
/// for `PathCounter::count`, which computes the same quantity by recurrence.
pub fn exhaustive_count(alphabet: &StepAlphabet, target: u64) -> u128 {
    let max_len = alphabet.max_step_count(target);
    let candidates = candidate_multisets(alphabet, max_len);

    let total = candidates
        .iter()
        .filter(|candidate| candidate.iter().sum::<u64>() == target)
        .map(|candidate| distinct_ordering_count(candidate))
        .sum();

    debug!(
        "Exhaustive count for target {} over {:?}: {}",
        target,
        alphabet.steps(),
        total
    );
    total
}
