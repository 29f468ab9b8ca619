//! Configuration types for the reveal animation.
//!
//! Re-exports configuration from esumm-core and provides additional utilities.

use std::time::Duration;

// Re-export config types from core
pub use esumm_core::RevealConfig;

/// Extension trait for RevealConfig with utility methods
pub trait RevealConfigExt {
    /// Delay between revealed characters as a Duration
    fn char_interval(&self) -> Duration;

    /// Tick duration for the animation frame rate
    fn animation_tick_duration(&self) -> Duration;

    /// Check if the reveal animation is effectively enabled
    fn is_animated(&self) -> bool;
}

impl RevealConfigExt for RevealConfig {
    #[inline]
    fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.char_interval_ms > 0
    }
}
