use crate::{
    foundation::core::Millis,
    reveal::observer::RevealTarget,
};

/// Visual state of a reveal target, consumed by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Downward offset in pixels; zero once fully revealed.
    pub translate_y_px: f64,
}

impl RevealStyle {
    /// Pre-reveal state: transparent and pushed down by `offset_px`.
    pub fn hidden(offset_px: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_y_px: offset_px,
        }
    }

    /// Resting state after the entrance finished.
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            translate_y_px: 0.0,
        }
    }
}

/// Style of `target` at session time `now`.
pub fn reveal_style(target: &RevealTarget, offset_px: f64, now: Millis) -> RevealStyle {
    let Some(at) = target.revealed_at() else {
        return RevealStyle::hidden(offset_px);
    };
    let p = target.timing.progress(now.since(at));
    RevealStyle {
        opacity: p,
        translate_y_px: offset_px * (1.0 - p),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/style.rs"]
mod tests;
