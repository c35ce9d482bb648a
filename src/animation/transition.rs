use crate::animation::ease::Ease;

/// Delay, duration and curve of a one-shot transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionTiming {
    /// Wait before the transition starts moving.
    pub delay_ms: u64,
    /// Length of the transition once started.
    pub duration_ms: u64,
    /// Curve applied to linear progress.
    pub ease: Ease,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            duration_ms: 1000,
            ease: Ease::OutCubic,
        }
    }
}

impl TransitionTiming {
    /// Eased progress in `[0, 1]`, `elapsed_ms` after the trigger.
    pub fn progress(self, elapsed_ms: u64) -> f64 {
        if elapsed_ms < self.delay_ms {
            return 0.0;
        }
        let moving = elapsed_ms - self.delay_ms;
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = moving as f64 / self.duration_ms as f64;
        self.ease.apply(t)
    }

    /// Whether the transition has fully settled `elapsed_ms` after the trigger.
    pub fn is_settled(self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.delay_ms.saturating_add(self.duration_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
