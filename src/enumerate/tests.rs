use std::collections::BTreeSet;

use crate::enumerate::{
    candidate_multisets, combinations_with_replacement, distinct_ordering_count,
    distinct_orderings, exhaustive_count, sub_multisets,
};
use crate::input::StepAlphabet;

fn alphabet(steps: &[i64]) -> StepAlphabet {
    match StepAlphabet::new(steps) {
        Ok(alphabet) => alphabet,
        Err(err) => panic!("expected valid alphabet, got {}", err),
    }
}

#[test]
fn test_combinations_with_replacement_two_over_two() {
    let combinations = combinations_with_replacement(&[1, 2], 2);
    assert_eq!(combinations, vec![vec![1, 1], vec![1, 2], vec![2, 2]]);
}

#[test]
fn test_combinations_with_replacement_length_one() {
    let combinations = combinations_with_replacement(&[1, 2, 3], 1);
    assert_eq!(combinations, vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn test_combinations_with_replacement_length_zero() {
    let combinations = combinations_with_replacement(&[1, 2], 0);
    assert_eq!(combinations, vec![Vec::<u64>::new()]);
}

#[test]
fn test_combinations_with_replacement_count() {
    // C(n + k - 1, k) combinations of length k over n symbols
    let combinations = combinations_with_replacement(&[1, 2, 3], 3);
    assert_eq!(combinations.len(), 10);
}

#[test]
fn test_sub_multisets_with_repeated_value() {
    let subsets = sub_multisets(&[1, 1, 2]);
    let expected: BTreeSet<Vec<u64>> = [
        vec![],
        vec![1],
        vec![2],
        vec![1, 1],
        vec![1, 2],
        vec![1, 1, 2],
    ]
    .into_iter()
    .collect();
    assert_eq!(subsets, expected);
}

#[test]
fn test_candidate_multisets_union() {
    let candidates = candidate_multisets(&alphabet(&[1, 2]), 2);
    let expected: BTreeSet<Vec<u64>> = [
        vec![],
        vec![1],
        vec![2],
        vec![1, 1],
        vec![1, 2],
        vec![2, 2],
    ]
    .into_iter()
    .collect();
    assert_eq!(candidates, expected);
}

#[test]
fn test_distinct_ordering_count_with_repeats() {
    // {1,1,2} orders as (1,1,2), (1,2,1), (2,1,1)
    assert_eq!(distinct_ordering_count(&[1, 1, 2]), 3);
}

#[test]
fn test_distinct_ordering_count_all_distinct() {
    assert_eq!(distinct_ordering_count(&[1, 2, 3]), 6);
}

#[test]
fn test_distinct_ordering_count_degenerate() {
    assert_eq!(distinct_ordering_count(&[]), 1);
    assert_eq!(distinct_ordering_count(&[5]), 1);
    assert_eq!(distinct_ordering_count(&[3, 3, 3]), 1);
}

#[test]
fn test_distinct_ordering_count_multinomial() {
    // n! / k! with a single repeated value: 4! / 3! = 4
    assert_eq!(distinct_ordering_count(&[1, 1, 1, 2]), 4);
    // 4! / (2! * 2!) = 6
    assert_eq!(distinct_ordering_count(&[1, 1, 2, 2]), 6);
}

#[test]
fn test_distinct_orderings_match_their_count() {
    for multiset in [vec![1u64, 1, 2], vec![1, 2, 3], vec![2, 2, 4, 4]] {
        let orderings = distinct_orderings(&multiset);
        assert_eq!(orderings.len() as u128, distinct_ordering_count(&multiset));
        for ordering in &orderings {
            assert_eq!(ordering.len(), multiset.len());
            assert_eq!(
                ordering.iter().sum::<u64>(),
                multiset.iter().sum::<u64>()
            );
        }
    }
}

#[test]
fn test_distinct_orderings_listing() {
    let orderings = distinct_orderings(&[1, 1, 2]);
    let expected: BTreeSet<Vec<u64>> = [vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]
        .into_iter()
        .collect();
    assert_eq!(orderings, expected);
}

#[test]
fn test_exhaustive_count_reference_values() {
    assert_eq!(exhaustive_count(&alphabet(&[1]), 3), 1);
    assert_eq!(exhaustive_count(&alphabet(&[2, 4]), 6), 3);
    assert_eq!(exhaustive_count(&alphabet(&[1, 2]), 2), 2);
    assert_eq!(exhaustive_count(&alphabet(&[2]), 1), 0);
    assert_eq!(exhaustive_count(&alphabet(&[2, 4, 6]), 13), 0);
}
