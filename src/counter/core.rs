use log::{debug, info};

use crate::input::{validate_target, InputError, StepAlphabet};

/// Counts the distinct ordered step sequences that exactly cover a target distance
pub struct PathCounter {}

impl PathCounter {
    /// Create a new path counter
    pub fn new() -> Self {
        Self {}
    }

    /// Count paths for already-validated input
    ///
    /// Dynamic-programming recurrence over ordered compositions: the number
    /// of paths covering distance `d` is the sum over each step size `s <= d`
    /// of the number of paths covering `d - s`, with a single empty path at
    /// distance 0.
    pub fn count(&self, alphabet: &StepAlphabet, target: u64) -> u128 {
        let target = target as usize;
        let mut ways = vec![0u128; target + 1];
        ways[0] = 1;

        for distance in 1..=target {
            for &step in alphabet.steps() {
                let step = step as usize;
                if step > distance {
                    // steps are sorted ascending
                    break;
                }
                ways[distance] += ways[distance - step];
            }
        }

        debug!("Counted {} paths to distance {}", ways[target], target);
        ways[target]
    }

    /// Count paths, emitting every distinct ordered sequence to `sink`
    ///
    /// Paths are walked depth-first over the ascending alphabet, so the sink
    /// observes them in lexicographic order. Returns the number of paths
    /// emitted, which equals [`Self::count`] for the same inputs.
    pub fn count_with_sink<F>(&self, alphabet: &StepAlphabet, target: u64, sink: &mut F) -> u128
    where
        F: FnMut(&[u64]),
    {
        let mut path = Vec::new();
        walk(alphabet.steps(), target, &mut path, sink)
    }

    /// Validate raw input and count
    ///
    /// Validation order: step alphabet first (dedupe, drop zeroes, emptiness,
    /// positivity), then the target distance.
    ///
    /// # Errors
    ///
    /// Returns an error if the step sizes or the target distance fail
    /// validation; counting itself cannot fail.
    pub fn count_paths(&self, step_sizes: &[i64], target_distance: i64) -> Result<u128, InputError> {
        let alphabet = StepAlphabet::new(step_sizes)?;
        let target = validate_target(target_distance)?;

        info!(
            "Counting paths over {:?} with a target of {}",
            alphabet.steps(),
            target
        );
        Ok(self.count(&alphabet, target))
    }

    /// Validate raw input and count, emitting every path to `sink`
    ///
    /// # Errors
    ///
    /// Returns an error if the step sizes or the target distance fail
    /// validation.
    pub fn count_paths_verbose<F>(
        &self,
        step_sizes: &[i64],
        target_distance: i64,
        sink: &mut F,
    ) -> Result<u128, InputError>
    where
        F: FnMut(&[u64]),
    {
        let alphabet = StepAlphabet::new(step_sizes)?;
        let target = validate_target(target_distance)?;

        info!(
            "Enumerating paths over {:?} with a target of {}",
            alphabet.steps(),
            target
        );
        Ok(self.count_with_sink(&alphabet, target, sink))
    }
}

impl Default for PathCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a step sequence for display, e.g. `1 + 1 + 2`
pub fn format_path(path: &[u64]) -> String {
    path.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn walk<F>(steps: &[u64], remaining: u64, path: &mut Vec<u64>, sink: &mut F) -> u128
where
    F: FnMut(&[u64]),
{
    if remaining == 0 {
        sink(path);
        return 1;
    }

    let mut total = 0;
    for &step in steps {
        if step > remaining {
            break;
        }
        path.push(step);
        total += walk(steps, remaining - step, path, sink);
        path.pop();
    }
    total
}
