//! Stepways - count the ways to walk a distance with allowed step sizes
//!
//! This library counts the distinct ordered sequences of positive-integer
//! steps, drawn from a caller-supplied alphabet of allowed step sizes, whose
//! sum exactly equals a target distance (no stepping backwards).

pub mod counter;
pub mod enumerate;
pub mod input;

// Re-export the main public API
pub use counter::constants::INPUT_ERROR;
pub use counter::{format_path, PathCounter};
pub use input::{validate_target, InputError, StepAlphabet};

use log::warn;

/// Count the distinct ordered step sequences summing to the target distance
///
/// This is a convenience function that validates the input and runs the
/// default counter.
///
/// # Arguments
///
/// * `step_sizes` - The allowed step sizes; duplicates are collapsed and
///   zeroes dropped before validation
/// * `target_distance` - The distance the steps must sum to exactly
///
/// # Returns
///
/// * `Ok(count)` - The number of distinct ordered step sequences
/// * `Err(InputError)` - If the step sizes or target distance are invalid
///
/// # Errors
///
/// This function will return an error if:
/// * No usable step sizes remain after dropping zeroes
/// * Any remaining step size is negative
/// * The target distance is less than 1
///
/// # Examples
///
/// ```
/// use stepways::count_step_paths;
///
/// // (1,1), (2): two ways to cover a distance of 2 with steps of 1 and 2
/// match count_step_paths(&[1, 2], 2) {
///     Ok(count) => assert_eq!(count, 2),
///     Err(err) => panic!("unexpected error: {}", err),
/// }
/// ```
pub fn count_step_paths(step_sizes: &[i64], target_distance: i64) -> Result<u128, InputError> {
    PathCounter::new().count_paths(step_sizes, target_distance)
}

/// Sentinel-style entry point for loose numeric input
///
/// Accepts arbitrary finite numeric step sizes and collapses any validation
/// failure to the [`INPUT_ERROR`] sentinel (`-1`) after logging the specific
/// violation, instead of surfacing an error value. Callers that want
/// result-style propagation should use [`count_step_paths`] instead.
///
/// With `verbose` set, every distinct step sequence is printed to stdout in
/// lexicographic order as it is found.
///
/// # Examples
///
/// ```
/// // Mixed numeric input is rejected with the sentinel, not an error
/// assert_eq!(stepways::solve(&[1.0, 2.0, 0.5], 10, false), -1);
/// assert_eq!(stepways::solve(&[2.0, 4.0], 6, false), 3);
/// ```
pub fn solve(allowed_step_sizes: &[f64], target_distance: i64, verbose: bool) -> i128 {
    let alphabet = match StepAlphabet::from_raw(allowed_step_sizes) {
        Ok(alphabet) => alphabet,
        Err(err) => {
            warn!("{}", err);
            return INPUT_ERROR;
        }
    };

    let target = match validate_target(target_distance) {
        Ok(target) => target,
        Err(err) => {
            warn!("{}", err);
            return INPUT_ERROR;
        }
    };

    let counter = PathCounter::new();
    let count = if verbose {
        counter.count_with_sink(&alphabet, target, &mut |path: &[u64]| {
            println!("{}", format_path(path));
        })
    } else {
        counter.count(&alphabet, target)
    };

    i128::try_from(count).unwrap_or(i128::MAX)
}
