use log::{debug, warn};

use crate::input::errors::InputError;

/// # Errors
///
/// Returns an error if the target distance is not at least 1.
pub fn validate_target(target_distance: i64) -> Result<u64, InputError> {
    debug!("Validating target distance: {}", target_distance);

    if target_distance < 1 {
        warn!("Rejecting non-positive target distance: {}", target_distance);
        return Err(InputError::NonPositiveTarget(target_distance));
    }

    Ok(target_distance as u64)
}
