use crate::foundation::{
    core::Millis,
    error::{FxError, FxResult},
};

/// Timer-driven slideshow index that wraps forever until stopped.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleDriver {
    images: Vec<String>,
    interval_ms: u64,
    current: usize,
    previous: Option<usize>,
    started_at: Millis,
    ticks: u64,
    last_switch_at: Option<Millis>,
    running: bool,
}

impl CycleDriver {
    /// Start cycling `images` every `interval_ms`, beginning at index 0.
    pub fn start(images: Vec<String>, interval_ms: u64, now: Millis) -> FxResult<Self> {
        if images.is_empty() {
            return Err(FxError::validation("slideshow needs at least one image"));
        }
        if interval_ms == 0 {
            return Err(FxError::validation("slideshow interval_ms must be > 0"));
        }
        Ok(Self {
            images,
            interval_ms,
            current: 0,
            previous: None,
            started_at: now,
            ticks: 0,
            last_switch_at: None,
            running: true,
        })
    }

    /// Cancel the timer. Later ticks and clock advances leave the index alone.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(index = self.current, ticks = self.ticks, "slideshow stopped");
        }
        self.running = false;
    }

    /// Whether the timer is still armed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One timer firing: advance with wraparound.
    pub fn tick(&mut self) {
        self.advance_by(1);
    }

    /// Fire every tick that has come due by `now`, returning how many fired.
    ///
    /// Clock values earlier than the last due tick fire nothing.
    pub fn advance_to(&mut self, now: Millis) -> u64 {
        if !self.running {
            return 0;
        }
        let due = now.since(self.started_at) / self.interval_ms;
        if due <= self.ticks {
            return 0;
        }
        let fired = due - self.ticks;
        self.advance_by(fired);
        self.last_switch_at = Some(self.started_at.after(due.saturating_mul(self.interval_ms)));
        fired
    }

    fn advance_by(&mut self, n: u64) {
        if !self.running || n == 0 {
            return;
        }
        let len = self.images.len() as u64;
        self.previous = Some(self.current);
        self.current = ((self.current as u64 + n % len) % len) as usize;
        self.ticks = self.ticks.saturating_add(n);
        tracing::debug!(index = self.current, ticks = self.ticks, "slideshow advanced");
    }

    /// Index of the fully visible image.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// URL of the fully visible image.
    pub fn current_image(&self) -> &str {
        &self.images[self.current]
    }

    /// Index that was on screen before the most recent advance, if any advance happened.
    ///
    /// When one advance fires several ticks this is the slide displayed before it,
    /// not the one just behind `current` in the sequence.
    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    /// Image sequence in display order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Configured interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Total ticks fired since start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Session time of the most recent clock-driven switch.
    pub fn last_switch_at(&self) -> Option<Millis> {
        self.last_switch_at
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cycle/driver.rs"]
mod tests;
