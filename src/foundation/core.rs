use crate::foundation::error::{FxError, FxResult};

pub use kurbo::{Point, Rect};

/// Session clock time in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero (page load).
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Shift forward by `ms`.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// Caller-chosen identity of a mounted element.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementKey(pub String);

impl ElementKey {
    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> FxResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(FxError::validation(
                "viewport width/height must be finite and >= 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// The visible region in document coordinates for a vertical scroll offset.
    pub fn visible_rect(self, scroll_y: f64) -> Rect {
        Rect::new(0.0, scroll_y, self.width, scroll_y + self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
