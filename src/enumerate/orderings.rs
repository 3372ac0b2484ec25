use std::collections::{BTreeMap, BTreeSet};

/// Number of unique permutations of a multiset (the multinomial coefficient)
///
/// Computed as a product of binomials, placing each distinct value's run into
/// the slots still unassigned; each partial product is itself a binomial, so
/// the division at every stage is exact.
pub fn distinct_ordering_count(multiset: &[u64]) -> u128 {
    let counts = value_counts(multiset);

    let mut remaining = multiset.len() as u128;
    let mut total = 1u128;
    for &count in counts.values() {
        total *= binomial(remaining, count as u128);
        remaining -= count as u128;
    }
    total
}

/// The unique permutations of a multiset
///
/// Positions holding equal values are interchangeable, so swapping them does
/// not produce a new ordering. Output is sorted (BTreeSet iteration order).
pub fn distinct_orderings(multiset: &[u64]) -> BTreeSet<Vec<u64>> {
    let mut counts = value_counts(multiset);
    let mut current = Vec::with_capacity(multiset.len());
    let mut result = BTreeSet::new();
    arrange(&mut counts, multiset.len(), &mut current, &mut result);
    result
}

fn value_counts(multiset: &[u64]) -> BTreeMap<u64, usize> {
    let mut counts = BTreeMap::new();
    for &value in multiset {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

fn binomial(n: u128, k: u128) -> u128 {
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

fn arrange(
    counts: &mut BTreeMap<u64, usize>,
    remaining: usize,
    current: &mut Vec<u64>,
    out: &mut BTreeSet<Vec<u64>>,
) {
    if remaining == 0 {
        out.insert(current.clone());
        return;
    }

    let values: Vec<u64> = counts.keys().copied().collect();
    for value in values {
        let available = counts.get(&value).copied().unwrap_or(0);
        if available == 0 {
            continue;
        }

        if let Some(count) = counts.get_mut(&value) {
            *count -= 1;
        }
        current.push(value);
        arrange(counts, remaining - 1, current, out);
        current.pop();
        if let Some(count) = counts.get_mut(&value) {
            *count += 1;
        }
    }
}
