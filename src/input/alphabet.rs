use std::collections::BTreeSet;

use log::{debug, warn};

use crate::input::errors::InputError;

// Above 2^53 an f64 no longer identifies a single integer, so a "loose" value
// that large cannot be trusted as a step size.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// The validated set of allowed step sizes: distinct, positive, sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAlphabet {
    steps: Vec<u64>,
}

impl StepAlphabet {
    /// Build an alphabet from typed integer input
    ///
    /// Duplicates are collapsed and zeroes dropped before any check runs.
    ///
    /// # Errors
    ///
    /// Returns an error if no step sizes remain after dropping zeroes, or if
    /// any remaining step size is negative.
    pub fn new(step_sizes: &[i64]) -> Result<Self, InputError> {
        debug!("Validating step sizes: {:?}", step_sizes);

        let mut distinct: BTreeSet<i64> = step_sizes.iter().copied().collect();
        distinct.remove(&0);

        if distinct.is_empty() {
            warn!("No usable step sizes after removing zeroes: {:?}", step_sizes);
            return Err(InputError::NoUsableSteps);
        }

        if let Some(&bad) = distinct.iter().find(|&&s| s < 0) {
            warn!("Rejecting negative step size: {}", bad);
            return Err(InputError::NonPositiveStep(bad));
        }

        let steps: Vec<u64> = distinct.into_iter().map(|s| s as u64).collect();
        debug!("Validated step alphabet: {:?}", steps);
        Ok(Self { steps })
    }

    /// Build an alphabet from loose numeric input
    ///
    /// Entry point for callers that cannot guarantee integer input up front.
    /// Applies the same dedupe-then-drop-zeroes preamble as [`Self::new`],
    /// then rejects any value that is not an exactly representable integer.
    ///
    /// # Errors
    ///
    /// Returns an error if no step sizes remain after dropping zeroes, if any
    /// remaining value is non-integral or non-finite, or if any is negative.
    pub fn from_raw(values: &[f64]) -> Result<Self, InputError> {
        debug!("Validating raw step sizes: {:?}", values);

        let mut distinct: Vec<f64> = values.to_vec();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        distinct.retain(|&v| v != 0.0);

        if distinct.is_empty() {
            warn!("No usable step sizes after removing zeroes: {:?}", values);
            return Err(InputError::NoUsableSteps);
        }

        let mut steps = Vec::with_capacity(distinct.len());
        for &value in &distinct {
            if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_EXACT_FLOAT {
                warn!("Rejecting non-integer step size: {}", value);
                return Err(InputError::NonIntegerStep(value));
            }
            steps.push(value as i64);
        }

        Self::new(&steps)
    }

    /// The step sizes, distinct and sorted ascending
    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    /// The smallest allowed step size
    pub fn smallest(&self) -> u64 {
        // Non-empty is an invariant of construction
        self.steps[0]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The largest number of steps that could possibly sum to `target`
    ///
    /// No path can take more steps than `target / smallest()`, so enumeration
    /// never needs to look past this bound.
    pub fn max_step_count(&self, target: u64) -> usize {
        (target / self.smallest()) as usize
    }
}
