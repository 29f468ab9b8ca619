//! Deadline helpers for reveal scheduling.

use std::time::Instant;

/// Check whether a scheduled deadline has been reached
#[inline]
pub fn is_due(deadline: Instant, now: Instant) -> bool {
    now >= deadline
}
