use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use crate::input::StepAlphabet;

/// All non-decreasing sequences of exactly `len` elements over `steps`
///
/// `steps` must be sorted ascending and duplicate-free; the output is in
/// lexicographic order.
pub fn combinations_with_replacement(steps: &[u64], len: usize) -> Vec<Vec<u64>> {
    if len == 0 {
        return vec![Vec::new()];
    }
    if steps.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices = vec![0usize; len];

    loop {
        result.push(indices.iter().map(|&i| steps[i]).collect());

        // Find the rightmost index that can still grow, then reset the tail
        // to that new value to stay non-decreasing
        let mut pos = len;
        while pos > 0 && indices[pos - 1] + 1 >= steps.len() {
            pos -= 1;
        }
        if pos == 0 {
            break;
        }
        let next = indices[pos - 1] + 1;
        for index in indices.iter_mut().skip(pos - 1) {
            *index = next;
        }
    }

    debug!(
        "Generated {} combinations of length {} over {:?}",
        result.len(),
        len,
        steps
    );
    result
}

/// Every sub-multiset of a combination, in canonical sorted form
///
/// Walks the powerset of element positions; because the input combination is
/// non-decreasing, every selected subsequence is already canonical. Intended
/// for small combinations (the position count is a bit-mask width).
pub fn sub_multisets(combination: &[u64]) -> BTreeSet<Vec<u64>> {
    debug_assert!(combination.len() < 64);

    let mut result = BTreeSet::new();
    for mask in 0u64..(1u64 << combination.len()) {
        let subset: Vec<u64> = combination
            .iter()
            .enumerate()
            .filter(|&(position, _)| mask & (1 << position) != 0)
            .map(|(_, &value)| value)
            .collect();
        result.insert(subset);
    }
    result
}

/// The complete set of distinct multisets of length 0..=`max_len` drawable
/// from the alphabet
///
/// Union of the sub-multisets of every maximal-length combination. The outer
/// combination loop is sharded across workers; the union makes the merge
/// order irrelevant, so the result is deterministic.
pub fn candidate_multisets(alphabet: &StepAlphabet, max_len: usize) -> BTreeSet<Vec<u64>> {
    let combinations = combinations_with_replacement(alphabet.steps(), max_len);

    let candidates = combinations
        .par_iter()
        .map(|combination| sub_multisets(combination))
        .reduce(BTreeSet::new, |mut union, shard| {
            union.extend(shard);
            union
        });

    debug!(
        "Collected {} candidate multisets up to length {}",
        candidates.len(),
        max_len
    );
    candidates
}
