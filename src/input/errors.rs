use thiserror::Error;

/// Errors raised while validating caller-supplied input
///
/// Every variant is the same kind of failure (invalid input); they are kept
/// separate so the diagnostic message can name the specific violation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("no usable step sizes")]
    NoUsableSteps,
    #[error("step sizes must be positive integers: {0}")]
    NonPositiveStep(i64),
    #[error("step sizes must be positive integers: {0}")]
    NonIntegerStep(f64),
    #[error("target distance must be positive: {0}")]
    NonPositiveTarget(i64),
}
