//! Assorted helpers for sizing DP tables.

use crate::error::{KnapsackError, KnapsackResult};

/// Convert a table axis bound (capacity or profit limit) into a row width.
///
/// The width is `bound + 1` because both axes are inclusive of zero. Fails if
/// the full `(layers + 1) × width` buffer would not be addressable.
#[inline]
pub fn axis_width(bound: u64, layers: usize) -> KnapsackResult<usize> {
    let width = usize::try_from(bound)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or(KnapsackError::CapacityTooLarge(bound))?;
    layers
        .checked_add(1)
        .and_then(|rows| rows.checked_mul(width))
        .ok_or(KnapsackError::CapacityTooLarge(bound))?;
    Ok(width)
}
